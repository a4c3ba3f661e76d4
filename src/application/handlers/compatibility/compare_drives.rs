//! CompareDrivesHandler - Per-drive comparison against the owner.

use std::sync::Arc;

use crate::domain::compatibility::{compare_drives, DriveComparison};
use crate::domain::frameworks::{DriveScores, OwnerProfile};

pub struct CompareDrivesHandler {
    owner: Arc<OwnerProfile>,
}

impl CompareDrivesHandler {
    pub fn new(owner: Arc<OwnerProfile>) -> Self {
        Self { owner }
    }

    pub fn handle(&self, visitor: &DriveScores) -> Vec<DriveComparison> {
        compare_drives(visitor, &self.owner.profile.drives)
    }
}
