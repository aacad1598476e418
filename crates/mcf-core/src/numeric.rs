use crate::McfError;

/// Amount of flow (and residual capacity) carried by an edge.
pub type Flow = i64;

/// Per-unit edge cost, path cost, potential.
pub type Cost = i64;

/// "Unbounded" flow, used as the starting bottleneck and the default flow limit.
pub const INF_FLOW: Flow = Flow::MAX;

/// Distance of a node that has not been reached.
///
/// Reserved: a real distance or potential may never equal it. Use
/// [`checked_distance`] for any sum stored in a distance or potential slot.
pub const INF_COST: Cost = Cost::MAX;

#[inline]
pub fn is_reached(dist: Cost) -> bool {
    dist != INF_COST
}

pub fn checked_add(a: i64, b: i64, what: &'static str) -> Result<i64, McfError> {
    a.checked_add(b).ok_or(McfError::Overflow { what })
}

/// `checked_add` for distances and potentials; landing on `INF_COST` also
/// counts as overflow, since that value marks an unreached node.
pub fn checked_distance(a: Cost, b: Cost, what: &'static str) -> Result<Cost, McfError> {
    match a.checked_add(b) {
        Some(sum) if is_reached(sum) => Ok(sum),
        _ => Err(McfError::Overflow { what }),
    }
}

pub fn checked_sub(a: i64, b: i64, what: &'static str) -> Result<i64, McfError> {
    a.checked_sub(b).ok_or(McfError::Overflow { what })
}

pub fn checked_mul(a: i64, b: i64, what: &'static str) -> Result<i64, McfError> {
    a.checked_mul(b).ok_or(McfError::Overflow { what })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_add_reports_overflow() {
        assert_eq!(checked_add(2, 3, "sum"), Ok(5));
        let err = checked_add(Cost::MAX, 1, "path cost").unwrap_err();
        assert_eq!(err, McfError::Overflow { what: "path cost" });
        assert!(format!("{err}").contains("path cost"));
    }

    #[test]
    fn checked_distance_rejects_the_sentinel() {
        assert_eq!(checked_distance(Cost::MAX - 2, 1, "dist"), Ok(Cost::MAX - 1));
        assert_eq!(
            checked_distance(Cost::MAX - 1, 1, "dist"),
            Err(McfError::Overflow { what: "dist" })
        );
        assert!(checked_distance(Cost::MAX, 1, "dist").is_err());
        assert_eq!(checked_distance(Cost::MIN, 0, "dist"), Ok(Cost::MIN));
    }

    #[test]
    fn checked_mul_reports_overflow() {
        assert_eq!(checked_mul(-4, 5, "cost"), Ok(-20));
        assert!(checked_mul(Flow::MAX, 2, "cost").is_err());
    }

    #[test]
    fn reached_sentinel() {
        assert!(is_reached(0));
        assert!(is_reached(-7));
        assert!(!is_reached(INF_COST));
    }
}
