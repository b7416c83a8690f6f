use taskfeed_gui_shared::{
  CommentPermissions,
  MessageSegment,
  User,
  insert_mention,
  mention_query,
  parse_tagged_message
};
use web_sys::HtmlTextAreaElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_context,
  use_state
};

use super::Avatar;
use crate::app::DisplaySettings;
use crate::datetime::format_timestamp;
use crate::messages::Message;

#[derive(Debug, Clone, PartialEq)]
pub struct TranslateRequest {
  pub id:             String,
  pub tagged_message: String
}

#[derive(Clone, PartialEq)]
pub struct Translations {
  pub enabled:      bool,
  pub on_translate:
    Callback<TranslateRequest>
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentEdit {
  pub id:          String,
  pub text:        String,
  pub has_mention: bool
}

#[derive(Properties, PartialEq)]
pub struct CommentProps {
  pub id:                     String,
  pub created_at:             String,
  pub created_by:             User,
  pub current_user:           User,
  pub tagged_message:         String,
  #[prop_or_default]
  pub translated_tagged_message:
    Option<String>,
  #[prop_or_default]
  pub translations:
    Option<Translations>,
  pub permissions:
    CommentPermissions,
  pub inline_delete_message:  Message,
  #[prop_or_default]
  pub is_pending:             bool,
  #[prop_or_default]
  pub is_disabled:            bool,
  pub get_avatar_url:
    Callback<String, Option<String>>,
  #[prop_or_default]
  pub get_user_profile_url: Option<
    Callback<String, Option<String>>
  >,
  #[prop_or_default]
  pub get_mention_with_query:
    Option<Callback<String>>,
  #[prop_or_default]
  pub mention_selector_contacts:
    Vec<User>,
  #[prop_or_default]
  pub on_delete:
    Option<Callback<String>>,
  #[prop_or_default]
  pub on_edit:
    Option<Callback<CommentEdit>>,
  pub avatar_renderer:
    Callback<Html, Html>,
  pub user_headline_renderer:
    Callback<Html, Html>
}

fn display_name(user: &User) -> String {
  if user.name.is_empty() {
    Message::UnknownUser
      .text()
      .to_string()
  } else {
    user.name.clone()
  }
}

fn user_link(
  user: &User,
  get_user_profile_url: Option<
    &Callback<String, Option<String>>
  >,
  class: &'static str
) -> Html {
  let href = get_user_profile_url
    .filter(|_| !user.is_placeholder())
    .and_then(|callback| {
      callback.emit(user.id.clone())
    });
  let name = display_name(user);

  match href {
    | Some(href) => html! {
        <a {class} {href} target="_blank" rel="noopener noreferrer">{ name }</a>
    },
    | None => html! {
        <span {class}>{ name }</span>
    }
  }
}

fn render_tagged_message(
  message: &str,
  get_user_profile_url: Option<
    &Callback<String, Option<String>>
  >
) -> Html {
  html! {
      <>
          {
              for parse_tagged_message(message).into_iter().map(|segment| match segment {
                  | MessageSegment::Text(text) => html! { { text } },
                  | MessageSegment::Mention { user_id, name } => {
                      let mentioned = User {
                          id: user_id,
                          name: format!("@{name}"),
                          ..User::placeholder()
                      };
                      user_link(&mentioned, get_user_profile_url, "bcs-comment-mention")
                  }
              })
          }
      </>
  }
}

#[function_component(Comment)]
pub fn comment(
  props: &CommentProps
) -> Html {
  let settings =
    use_context::<DisplaySettings>()
      .unwrap_or_default();
  let confirming_delete =
    use_state(|| false);
  let editing = use_state(|| false);
  let draft = use_state(String::new);
  let show_translation =
    use_state(|| false);

  let menu_enabled =
    !props.is_pending && !props.is_disabled;
  let can_delete = menu_enabled
    && props.permissions.can_delete
    && props.on_delete.is_some();
  let can_edit = menu_enabled
    && props.permissions.can_edit
    && props.on_edit.is_some();

  let avatar = props.avatar_renderer.emit(
    html! {
        <Avatar
            user={props.created_by.clone()}
            get_avatar_url={props.get_avatar_url.clone()}
        />
    }
  );
  let headline = props
    .user_headline_renderer
    .emit(user_link(
      &props.created_by,
      props.get_user_profile_url.as_ref(),
      "bcs-comment-user-name"
    ));
  let created_label = (!props
    .created_at
    .is_empty())
  .then(|| {
    format_timestamp(
      &props.created_at,
      settings.timezone,
      &settings.date_format
    )
  });

  let menu = if can_delete || can_edit {
    html! {
        <div class="bcs-comment-menu">
            {
                if can_edit {
                    let editing = editing.clone();
                    let draft = draft.clone();
                    let message = props.tagged_message.clone();
                    html! {
                        <button class="btn" type="button" onclick={Callback::from(move |_| {
                            draft.set(message.clone());
                            editing.set(true);
                        })}>{ Message::Edit.text() }</button>
                    }
                } else {
                    html! {}
                }
            }
            {
                if can_delete {
                    let confirming_delete = confirming_delete.clone();
                    html! {
                        <button class="btn danger" type="button" onclick={Callback::from(move |_| confirming_delete.set(true))}>
                            { Message::Delete.text() }
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
  } else {
    html! {}
  };

  let delete_prompt = match (
    *confirming_delete && can_delete,
    props.on_delete.clone()
  ) {
    | (true, Some(on_delete)) => {
      let id = props.id.clone();
      let confirm = {
        let confirming_delete =
          confirming_delete.clone();
        Callback::from(move |_| {
          tracing::info!(
            comment_id = %id,
            "delete confirmed"
          );
          confirming_delete.set(false);
          on_delete.emit(id.clone());
        })
      };
      let cancel = {
        let confirming_delete =
          confirming_delete.clone();
        Callback::from(move |_| {
          confirming_delete.set(false)
        })
      };
      html! {
          <div class="bcs-comment-delete-confirm" role="dialog">
              <span>{ props.inline_delete_message.text() }</span>
              <button class="btn danger" type="button" onclick={confirm}>{ Message::Delete.text() }</button>
              <button class="btn" type="button" onclick={cancel}>{ Message::Cancel.text() }</button>
          </div>
      }
    }
    | _ => html! {}
  };

  let body = if *editing && can_edit {
    let oninput = {
      let draft = draft.clone();
      let get_mention_with_query = props
        .get_mention_with_query
        .clone();
      Callback::from(
        move |event: InputEvent| {
          let value = event
            .target_unchecked_into::<
              HtmlTextAreaElement
            >()
            .value();
          if let (Some(callback), Some(query)) = (
            get_mention_with_query.as_ref(),
            mention_query(&value)
          ) {
            callback.emit(query.to_string());
          }
          draft.set(value);
        }
      )
    };
    let suggestions = if mention_query(
      &draft
    )
    .is_some()
    {
      html! {
          <ul class="bcs-mention-selector">
              {
                  for props.mention_selector_contacts.iter()
                      .filter(|contact| contact.id != props.current_user.id)
                      .cloned()
                      .map(|contact| {
                          let draft = draft.clone();
                          let label = display_name(&contact);
                          html! {
                              <li class="bcs-mention-selector-item" onclick={Callback::from(move |_| {
                                  draft.set(insert_mention(&draft, &contact));
                              })}>{ label }</li>
                          }
                      })
              }
          </ul>
      }
    } else {
      html! {}
    };
    let save = {
      let editing = editing.clone();
      let draft = draft.clone();
      let id = props.id.clone();
      let on_edit = props.on_edit.clone();
      Callback::from(move |_| {
        let text = draft.trim().to_string();
        if text.is_empty() {
          return;
        }
        let has_mention =
          parse_tagged_message(&text)
            .iter()
            .any(|segment| {
              matches!(
                segment,
                MessageSegment::Mention {
                  ..
                }
              )
            });
        if let Some(on_edit) = &on_edit {
          on_edit.emit(CommentEdit {
            id: id.clone(),
            text,
            has_mention
          });
        }
        editing.set(false);
      })
    };
    let cancel = {
      let editing = editing.clone();
      Callback::from(move |_| {
        editing.set(false)
      })
    };
    html! {
        <div class="bcs-comment-edit">
            <textarea class="bcs-comment-input" value={(*draft).clone()} {oninput} />
            { suggestions }
            <div class="bcs-comment-edit-actions">
                <button class="btn ok" type="button" disabled={draft.trim().is_empty()} onclick={save}>{ Message::Save.text() }</button>
                <button class="btn" type="button" onclick={cancel}>{ Message::Cancel.text() }</button>
            </div>
        </div>
    }
  } else {
    let translated = props
      .translated_tagged_message
      .clone()
      .filter(|_| *show_translation);
    let message = translated
      .clone()
      .unwrap_or_else(|| {
        props.tagged_message.clone()
      });
    let toggle = match props
      .translations
      .as_ref()
      .filter(|translations| {
        translations.enabled
      }) {
      | Some(_) if translated.is_some() => {
        let show_translation =
          show_translation.clone();
        html! {
            <button class="btn link bcs-comment-translate" type="button" onclick={Callback::from(move |_| show_translation.set(false))}>
                { Message::ShowOriginal.text() }
            </button>
        }
      }
      | Some(translations) => {
        let show_translation =
          show_translation.clone();
        let on_translate = translations
          .on_translate
          .clone();
        let request = TranslateRequest {
          id:             props.id.clone(),
          tagged_message: props
            .tagged_message
            .clone()
        };
        html! {
            <button class="btn link bcs-comment-translate" type="button" onclick={Callback::from(move |_| {
                on_translate.emit(request.clone());
                show_translation.set(true);
            })}>
                { Message::Translate.text() }
            </button>
        }
      }
      | None => html! {}
    };
    html! {
        <>
            <div class="bcs-comment-message">
                { render_tagged_message(&message, props.get_user_profile_url.as_ref()) }
            </div>
            { toggle }
        </>
    }
  };

  html! {
      <div class={classes!("bcs-comment", props.is_pending.then_some("bcs-is-pending"))}>
          { avatar }
          <div class="bcs-comment-content">
              <div class="bcs-comment-headline">
                  { headline }
                  { menu }
              </div>
              {
                  if let Some(label) = created_label {
                      html! { <time class="bcs-comment-created-at" datetime={props.created_at.clone()}>{ label }</time> }
                  } else {
                      html! {}
                  }
              }
              { delete_prompt }
              { body }
          </div>
      </div>
  }
}
