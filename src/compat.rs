//! Backward-compatibility shims
//!
//! Earlier releases exposed the resolver seams under interface-prefixed
//! names. The aliases below stay importable through one more release cycle
//! so downstream code keeps compiling, with a deprecation warning pointing
//! at the replacement.

use crate::resolver::convention::TemplateGuess;
use crate::templating::TemplateLocator;

/// Former name of [`TemplateLocator`]
#[deprecated(since = "0.6.0", note = "use `TemplateLocator` instead")]
pub trait ITemplateLocator: TemplateLocator {}

#[allow(deprecated)]
impl<T: TemplateLocator + ?Sized> ITemplateLocator for T {}

/// Former name of [`TemplateGuess`]
#[deprecated(since = "0.6.0", note = "use `TemplateGuess` instead")]
pub trait ITemplateGuess: TemplateGuess {}

#[allow(deprecated)]
impl<T: TemplateGuess + ?Sized> ITemplateGuess for T {}

#[cfg(test)]
mod tests {
    #![allow(deprecated)]

    use super::*;
    use crate::templating::StaticTemplateLocator;

    fn takes_legacy_locator(locator: &dyn ITemplateLocator) -> bool {
        locator.exists("status.html.twig")
    }

    #[test]
    fn test_old_trait_name_still_accepts_implementations() {
        let locator: StaticTemplateLocator = ["status.html.twig"].into_iter().collect();
        assert!(takes_legacy_locator(&locator));
    }
}
