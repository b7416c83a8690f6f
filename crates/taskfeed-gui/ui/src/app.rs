mod config;
mod feed;

use gloo::timers::future::TimeoutFuture;
use taskfeed_gui_shared::AssignmentUpdate;
use yew::{
  Callback,
  ContextProvider,
  Html,
  function_component,
  html,
  use_callback,
  use_effect_with,
  use_memo,
  use_reducer
};

pub use self::config::DisplaySettings;
use self::config::parse_feed_config;
use self::feed::{
  FeedAction,
  FeedState,
  parse_feed_tasks
};
use crate::components::{
  CommentEdit,
  Task
};

const FEED_CONFIG_TOML: &str =
  include_str!("../assets/feed.toml");
const FEED_TASKS_JSON: &str =
  include_str!("../assets/tasks.json");

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    parse_feed_config(FEED_CONFIG_TOML)
  });
  let feed = use_reducer(|| {
    FeedState::from_tasks(
      parse_feed_tasks(FEED_TASKS_JSON)
    )
  });

  {
    let task_count = feed.items.len();
    use_effect_with((), move |_| {
      tracing::info!(
        task_count,
        "activity feed mounted"
      );
      || ()
    });
  }

  let settings = config.display_settings();

  let get_avatar_url = use_callback(
    config.clone(),
    |user_id: String, config| {
      config.avatar_url(&user_id)
    }
  );
  let get_user_profile_url = use_callback(
    config.clone(),
    |user_id: String, config| {
      config.profile_url(&user_id)
    }
  );

  let on_assignment_update = {
    let feed = feed.clone();
    let latency_ms =
      config.simulated_latency_ms;
    Callback::from(
      move |update: AssignmentUpdate| {
        let in_flight =
          feed.items.iter().any(|item| {
            item.task.id == update.task_id
              && item.is_pending
          });
        if in_flight {
          tracing::warn!(
            task_id = %update.task_id,
            "ignoring update while another \
             is in flight"
          );
          return;
        }

        feed.dispatch(
          FeedAction::BeginUpdate(
            update.clone()
          )
        );
        let feed = feed.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            TimeoutFuture::new(latency_ms)
              .await;
            feed.dispatch(
              FeedAction::FinishUpdate(
                update
              )
            );
          }
        );
      }
    )
  };

  let on_delete = {
    let feed = feed.clone();
    Callback::from(move |task_id: String| {
      feed.dispatch(FeedAction::Delete(
        task_id
      ));
    })
  };

  let on_edit = {
    let feed = feed.clone();
    Callback::from(move |edit: CommentEdit| {
      tracing::debug!(
        task_id = %edit.id,
        has_mention = edit.has_mention,
        "task message edited"
      );
      feed.dispatch(FeedAction::Edit(edit));
    })
  };

  html! {
      <ContextProvider<DisplaySettings> context={settings}>
          <div class="bcs-activity-feed">
              {
                  if feed.items.is_empty() {
                      html! { <div class="bcs-activity-feed-empty">{ "No tasks yet." }</div> }
                  } else {
                      html! {}
                  }
              }
              {
                  for feed.items.iter().map(|item| html! {
                      <Task
                          key={item.task.id.clone()}
                          task={item.task.clone()}
                          current_user={config.current_user.clone()}
                          error={item.error.clone()}
                          is_pending={item.is_pending}
                          get_avatar_url={get_avatar_url.clone()}
                          get_user_profile_url={Some(get_user_profile_url.clone())}
                          on_assignment_update={on_assignment_update.clone()}
                          on_delete={Some(on_delete.clone())}
                          on_edit={Some(on_edit.clone())}
                      />
                  })
              }
          </div>
      </ContextProvider<DisplaySettings>>
  }
}

#[cfg(test)]
mod tests {
  use taskfeed_gui_shared::{
    CardFooter,
    HeadlineMessage,
    task_card_view
  };

  use super::*;

  #[test]
  fn url_callback_deps_compare_by_value()
  {
    let first = std::rc::Rc::new(
      parse_feed_config(FEED_CONFIG_TOML)
    );
    let second = std::rc::Rc::new(
      parse_feed_config(FEED_CONFIG_TOML)
    );
    assert_eq!(first, second);

    let other = std::rc::Rc::new(
      parse_feed_config("max_avatars = 5")
    );
    assert_ne!(first, other);
  }

  #[test]
  fn bundled_assets_load() {
    let config =
      parse_feed_config(FEED_CONFIG_TOML);
    assert_eq!(config.current_user.id, "u1");
    assert_eq!(
      config.display_settings().timezone,
      chrono_tz::America::Mexico_City
    );

    let tasks =
      parse_feed_tasks(FEED_TASKS_JSON);
    assert_eq!(tasks.len(), 3);

    let first = task_card_view(
      &tasks[0],
      &config.current_user,
      false,
      false
    );
    assert_eq!(
      first.headline,
      HeadlineMessage::ApprovalCurrentUser
    );
    assert!(matches!(
      first.footer,
      CardFooter::Actions { .. }
    ));

    let second = task_card_view(
      &tasks[1],
      &config.current_user,
      false,
      false
    );
    assert_eq!(
      second.headline,
      HeadlineMessage::General
    );
    assert!(matches!(
      second.footer,
      CardFooter::Status(_)
    ));
  }
}
