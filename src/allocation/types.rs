use std::collections::BTreeMap;

/// A roster entry. Non-empty and unique within its roster.
pub type Member = String;

/// Members seated together, in seat order.
pub type Team = Vec<Member>;

/// One team per capacity-plan entry; together a partition of the roster.
pub type Assignment = Vec<Team>;

/// Affinity group name -> members that should be spread apart
pub type AffinityGroups = BTreeMap<String, Vec<Member>>;
