use std::convert::Infallible;

use sarge::ArgumentType;

use super::{SourceArg, normalize_reference};

impl ArgumentType for SourceArg {
    type Error = Infallible;

    const REPEATABLE: bool = false;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let reference = val.map(normalize_reference).unwrap_or_default();
        Some(Ok(SourceArg(reference)))
    }

    fn default_value() -> Option<Self> {
        Some(SourceArg::default())
    }
}
