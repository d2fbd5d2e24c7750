use std::rc::Rc;

use crate::option::{InitOptions, Theme};

/// Identity key of one live instance: the write-once values it was created
/// from. Identity is `Rc` pointer identity, so a deep-equal value behind a
/// fresh `Rc` counts as a different identity and forces recreation.
pub(super) struct InstanceIdentity {
    pub(super) theme: Option<Rc<Theme>>,
    pub(super) init: Rc<InitOptions>,
}

impl InstanceIdentity {
    pub(super) fn matches(&self, theme: Option<&Rc<Theme>>, init: &Rc<InitOptions>) -> bool {
        if !Rc::ptr_eq(&self.init, init) {
            return false;
        }
        match (&self.theme, theme) {
            (None, None) => true,
            (Some(current), Some(next)) => Rc::ptr_eq(current, next),
            _ => false,
        }
    }
}
