use taskfeed_gui_shared::User;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

pub fn initials(name: &str) -> String {
  let mut words = name.split_whitespace();
  let first = words
    .next()
    .and_then(|word| word.chars().next());
  let last = words
    .next_back()
    .and_then(|word| word.chars().next());

  first
    .into_iter()
    .chain(last)
    .flat_map(char::to_uppercase)
    .collect()
}

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
  pub user:           User,
  pub get_avatar_url:
    Callback<String, Option<String>>,
  #[prop_or_default]
  pub class:          Option<String>
}

#[function_component(Avatar)]
pub fn avatar(
  props: &AvatarProps
) -> Html {
  let url = props
    .user
    .avatar_url
    .clone()
    .or_else(|| {
      props
        .get_avatar_url
        .emit(props.user.id.clone())
    });
  let class = classes!(
    "bcs-avatar",
    props.class.clone()
  );

  match url {
    | Some(src) => html! {
        <img {class} {src} alt={props.user.name.clone()} />
    },
    | None => html! {
        <span {class} aria-hidden="true">
            <span class="bcs-avatar-initials">{ initials(&props.user.name) }</span>
        </span>
    }
  }
}

#[cfg(test)]
mod tests {
  use super::initials;

  #[test]
  fn initials_use_first_and_last_word() {
    assert_eq!(
      initials("ada king lovelace"),
      "AL"
    );
    assert_eq!(initials("Grace"), "G");
    assert_eq!(initials("   "), "");
  }
}
