// SPDX-License-Identifier: PMPL-1.0-or-later

//! Table-driven service.

use super::LcidService;
use crate::locale::{self, Locale};

#[derive(Debug, Clone, Copy, Default)]
pub struct BasicLcidService;

impl LcidService for BasicLcidService {
    fn lcid_to_locale(&self, lcid: Option<i32>) -> Option<Locale> {
        locale::lcid_to_locale(lcid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_the_table() {
        let service = BasicLcidService;
        assert_eq!(
            service.lcid_to_locale(Some(0x040C)),
            Some(Locale::new("fr", "FR", ""))
        );
        assert_eq!(service.lcid_to_locale(Some(0x007B)), None);
        assert_eq!(service.lcid_to_locale(None), None);
    }
}
