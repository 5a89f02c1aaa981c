use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::user::User;

/// Creation and last-update tracking carried by every stored record.
///
/// The `created_*` half is written once. `touch` only moves the `updated_*`
/// half, so an update can never rewrite who created a record or when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStamp {
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    pub created_by: Option<Id<User>>,
    pub updated_by: Option<Id<User>>,
}

impl AuditStamp {
    pub fn new(actor: Id<User>, now: DateTime<Utc>) -> Self {
        Self {
            created_on: now,
            updated_on: now,
            created_by: Some(actor),
            updated_by: Some(actor),
        }
    }

    pub fn touch(&mut self, actor: Id<User>, now: DateTime<Utc>) {
        self.updated_on = now;
        self.updated_by = Some(actor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_stamps_both_halves() {
        let actor = Id::<User>::generate();
        let now = Utc::now();
        let stamp = AuditStamp::new(actor, now);
        assert_eq!(stamp.created_on, now);
        assert_eq!(stamp.updated_on, now);
        assert_eq!(stamp.created_by, Some(actor));
        assert_eq!(stamp.updated_by, Some(actor));
    }

    #[test]
    fn touch_leaves_creation_alone() {
        let creator = Id::<User>::generate();
        let editor = Id::<User>::generate();
        let created = Utc::now();
        let later = created + Duration::minutes(5);

        let mut stamp = AuditStamp::new(creator, created);
        stamp.touch(editor, later);

        assert_eq!(stamp.created_on, created);
        assert_eq!(stamp.created_by, Some(creator));
        assert_eq!(stamp.updated_on, later);
        assert_eq!(stamp.updated_by, Some(editor));
    }
}
