//! Status returned by behavior nodes.

/// The outcome of ticking a node.
///
/// Every tick resolves immediately, so there is no `Running` state: a
/// condition either holds or it does not, and an action node either
/// committed an action to the context or declined to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The condition held, or the action node committed an action.
    Success,

    /// The condition did not hold, or the node had nothing to contribute.
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Swaps `Success` and `Failure`.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}

impl From<bool> for Status {
    /// `true` maps to `Success`, `false` to `Failure`.
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_conversion_matches_invert() {
        assert_eq!(Status::from(true), Status::Success);
        assert_eq!(Status::from(false), Status::Failure);
        assert_eq!(Status::from(true).invert(), Status::Failure);
        assert!(Status::from(false).invert().is_success());
    }
}
