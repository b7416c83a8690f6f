use crate::model::{
  AssignmentStatus,
  TaskAssigneeCollection,
  TaskAssignment,
  User
};

pub const MAX_AVATARS: usize = 3;

/// Backfills an assignment whose target
/// is missing or unresolved with the
/// placeholder user.
pub fn fill_user_placeholder(
  assignment: &TaskAssignment
) -> TaskAssignment {
  let mut filled = assignment.clone();
  let resolved = filled
    .target
    .as_ref()
    .is_some_and(|user| {
      !user.id.is_empty()
    });
  if !resolved {
    filled.target =
      Some(User::placeholder());
  }
  filled
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
)]
pub struct AssigneeAvatar {
  pub assignment_id: String,
  pub status:        AssignmentStatus,
  pub user:          User
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
)]
pub struct AssigneesView {
  pub avatars:      Vec<AssigneeAvatar>,
  pub hidden_count: usize
}

impl AssigneesView {
  pub fn overflow_label(
    &self
  ) -> Option<String> {
    (self.hidden_count > 0).then(|| {
      format!("+{}", self.hidden_count)
    })
  }
}

pub fn assignees_view(
  assignees: Option<
    &TaskAssigneeCollection
  >,
  max_avatars: usize
) -> AssigneesView {
  let entries = assignees
    .map(|collection| {
      collection.entries.as_slice()
    })
    .unwrap_or_default();

  let avatars = entries
    .iter()
    .take(max_avatars)
    .map(fill_user_placeholder)
    .map(|assignment| AssigneeAvatar {
      assignment_id: assignment.id,
      status:        assignment.status,
      user:          assignment
        .target
        .unwrap_or_else(
          User::placeholder
        )
    })
    .collect();

  AssigneesView {
    avatars,
    hidden_count: entries
      .len()
      .saturating_sub(max_avatars)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn collection(
    count: usize
  ) -> TaskAssigneeCollection {
    TaskAssigneeCollection {
      entries: (0..count)
        .map(|index| TaskAssignment {
          id: format!("a{index}"),
          target: Some(User {
            id: format!("u{index}"),
            name: format!("User {index}"),
            ..User::placeholder()
          }),
          ..TaskAssignment::default()
        })
        .collect(),
      ..TaskAssigneeCollection::default()
    }
  }

  #[test]
  fn renders_min_of_count_and_limit() {
    for count in 0..7 {
      for max in 1..5 {
        let assignees = collection(count);
        let view = assignees_view(
          Some(&assignees),
          max
        );
        assert_eq!(
          view.avatars.len(),
          count.min(max)
        );
        if count > max {
          assert_eq!(
            view.overflow_label(),
            Some(format!(
              "+{}",
              count - max
            ))
          );
        } else {
          assert_eq!(
            view.overflow_label(),
            None
          );
        }
      }
    }
  }

  #[test]
  fn absent_collection_renders_nothing() {
    let view =
      assignees_view(None, MAX_AVATARS);
    assert!(view.avatars.is_empty());
    assert_eq!(view.hidden_count, 0);
    assert_eq!(view.overflow_label(), None);
  }

  #[test]
  fn missing_targets_become_placeholders(
  ) {
    let mut assignees = collection(2);
    assignees.entries[0].target = None;
    assignees.entries[1].target =
      Some(User {
        id: String::new(),
        ..User::placeholder()
      });

    let view = assignees_view(
      Some(&assignees),
      MAX_AVATARS
    );
    assert_eq!(view.avatars.len(), 2);
    for avatar in &view.avatars {
      assert!(
        avatar.user.is_placeholder()
      );
    }
    assert_eq!(
      view.avatars[0].assignment_id,
      "a0"
    );
  }

  #[test]
  fn resolved_targets_are_kept() {
    let assignees = collection(1);
    let filled = fill_user_placeholder(
      &assignees.entries[0]
    );
    assert_eq!(filled, assignees.entries[0]);
  }
}
