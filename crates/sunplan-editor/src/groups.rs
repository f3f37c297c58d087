//! Building groups.
//!
//! The registry keeps two maps in step: group → members and building →
//! group. Every mutation goes through one of the methods below, which also
//! dissolve any group left with fewer than two members.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use sunplan_core::{Building, BuildingId, GroupId};
use tracing::debug;

/// Smallest membership a group may have.
pub const MIN_GROUP_SIZE: usize = 2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupRegistry {
    groups: BTreeMap<GroupId, BTreeSet<BuildingId>>,
    membership: HashMap<BuildingId, GroupId>,
    next_id: u64,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group_of(&self, id: BuildingId) -> Option<GroupId> {
        self.membership.get(&id).copied()
    }

    pub fn members(&self, group: GroupId) -> Option<&BTreeSet<BuildingId>> {
        self.groups.get(&group)
    }

    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &BTreeSet<BuildingId>)> {
        self.groups.iter().map(|(id, members)| (*id, members))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups `ids` under a fresh group id.
    ///
    /// Members are first pulled out of their previous groups. Returns `None`
    /// without changing anything when fewer than two distinct ids are given.
    pub fn create_group(&mut self, ids: impl IntoIterator<Item = BuildingId>) -> Option<GroupId> {
        let members: BTreeSet<BuildingId> = ids.into_iter().collect();
        if members.len() < MIN_GROUP_SIZE {
            return None;
        }

        for id in &members {
            self.detach(*id);
        }

        self.next_id += 1;
        let group = GroupId(self.next_id);
        for id in &members {
            self.membership.insert(*id, group);
        }
        debug!("Created {} with {} members", group, members.len());
        self.groups.insert(group, members);
        Some(group)
    }

    /// Removes each id from whatever group holds it.
    ///
    /// Returns the groups that were dissolved as a result.
    pub fn ungroup(&mut self, ids: impl IntoIterator<Item = BuildingId>) -> Vec<GroupId> {
        ids.into_iter().filter_map(|id| self.detach(id)).collect()
    }

    /// Excises a deleted building; same dissolution rule as [`ungroup`](Self::ungroup).
    pub fn remove_building(&mut self, id: BuildingId) -> Option<GroupId> {
        self.detach(id)
    }

    /// Excises members that are no longer in `live`, dissolving as needed.
    pub fn retain_live(&mut self, live: &[Building]) -> Vec<GroupId> {
        let stale: Vec<BuildingId> = self
            .membership
            .keys()
            .filter(|id| !live.iter().any(|b| b.id == **id))
            .copied()
            .collect();
        self.ungroup(stale)
    }

    /// Drops every group.
    pub fn clear(&mut self) {
        self.groups.clear();
        self.membership.clear();
    }

    /// Removes `id` from its group and dissolves the group if it drops below
    /// two members. Returns the dissolved group id.
    fn detach(&mut self, id: BuildingId) -> Option<GroupId> {
        let group = self.membership.remove(&id)?;
        let members = self.groups.get_mut(&group)?;
        members.remove(&id);
        if members.len() >= MIN_GROUP_SIZE {
            return None;
        }

        if let Some(survivors) = self.groups.remove(&group) {
            for survivor in survivors {
                self.membership.remove(&survivor);
            }
        }
        debug!("Dissolved {}", group);
        Some(group)
    }
}
