use taskfeed_gui_shared::ActionItemError;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CommentInlineErrorProps {
  pub error: ActionItemError
}

#[function_component(CommentInlineError)]
pub fn comment_inline_error(
  props: &CommentInlineErrorProps
) -> Html {
  html! {
      <div class="bcs-ActivityError" role="alert">
          <div class="bcs-ActivityError-title">{ &props.error.title }</div>
          <div class="bcs-ActivityError-message">{ &props.error.message }</div>
          {
              if let Some(action) = props.error.action.clone() {
                  html! { <span class="bcs-ActivityError-action">{ action }</span> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
