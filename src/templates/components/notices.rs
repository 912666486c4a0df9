use crate::form::{Notice, NoticeVariant};
use maud::{html, Markup};

fn toast(notice: &Notice) -> Markup {
    let class = match notice.variant {
        NoticeVariant::Default => "toast",
        NoticeVariant::Destructive => "toast toast-destructive",
    };

    html! {
        div class=(class) role="status" {
            strong class="toast-title" { (notice.title) }
            p class="toast-description" { (notice.description) }
        }
    }
}

/// The `#notices` stack. With `oob` set it replaces the one already on the
/// page when returned from an htmx request.
pub fn notices_stack(notices: &[Notice], oob: bool) -> Markup {
    html! {
        div id="notices" class="toast-stack" aria-live="polite" hx-swap-oob=[oob.then_some("true")] {
            @for notice in notices {
                (toast(notice))
            }
        }
    }
}
