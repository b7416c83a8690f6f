//! Tagged message text. Mentions are
//! stored inline as `@[user_id:Name]`.

use crate::model::User;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
)]
pub enum MessageSegment {
  Text(String),
  Mention {
    user_id: String,
    name:    String
  }
}

fn push_text(
  segments: &mut Vec<MessageSegment>,
  text: &str
) {
  if text.is_empty() {
    return;
  }
  if let Some(MessageSegment::Text(
    last
  )) = segments.last_mut()
  {
    last.push_str(text);
  } else {
    segments.push(MessageSegment::Text(
      text.to_string()
    ));
  }
}

fn parse_mention(
  body: &str
) -> Option<MessageSegment> {
  let (user_id, name) =
    body.split_once(':')?;
  if user_id.is_empty()
    || name.trim().is_empty()
    || user_id
      .chars()
      .any(char::is_whitespace)
  {
    return None;
  }
  Some(MessageSegment::Mention {
    user_id: user_id.to_string(),
    name:    name.to_string()
  })
}

pub fn parse_tagged_message(
  message: &str
) -> Vec<MessageSegment> {
  let mut segments = Vec::new();
  let mut rest = message;

  while let Some(start) = rest.find("@[")
  {
    push_text(
      &mut segments,
      &rest[..start]
    );
    let after_open = &rest[start + 2..];
    let Some(close) = after_open.find(']')
    else {
      push_text(
        &mut segments,
        &rest[start..]
      );
      return segments;
    };

    match parse_mention(
      &after_open[..close]
    ) {
      | Some(mention) => {
        segments.push(mention)
      }
      | None => push_text(
        &mut segments,
        &rest[start..start + close + 3]
      )
    }
    rest = &after_open[close + 1..];
  }

  push_text(&mut segments, rest);
  segments
}

/// Text of the mention being typed at
/// the end of a draft, without the `@`.
pub fn mention_query(
  draft: &str
) -> Option<&str> {
  let at = draft.rfind('@')?;
  let query = &draft[at + 1..];
  let starts_word = draft[..at]
    .chars()
    .next_back()
    .is_none_or(char::is_whitespace);
  if !starts_word
    || query.starts_with('[')
    || query
      .chars()
      .any(char::is_whitespace)
  {
    return None;
  }
  Some(query)
}

/// Replaces the trailing mention query
/// with a tagged mention of `user`.
pub fn insert_mention(
  draft: &str,
  user: &User
) -> String {
  let prefix = match mention_query(draft)
  {
    | Some(query) => {
      &draft[..draft.len()
        - query.len()
        - 1]
    }
    | None => draft
  };
  format!(
    "{prefix}@[{}:{}] ",
    user.id, user.name
  )
}
