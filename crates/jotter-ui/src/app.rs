mod notes_page;
mod state;
mod tasks_page;

use gloo::console::log;
use yew::{
  Html,
  function_component,
  html
};
use yew_router::prelude::{
  BrowserRouter,
  Redirect,
  Routable,
  Switch
};

use self::notes_page::NotesPage;
use self::tasks_page::TasksPage;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Routable,
)]
pub enum Route {
  #[at("/")]
  Notes,
  #[at("/tasks")]
  Tasks,
  #[not_found]
  #[at("/404")]
  NotFound
}

fn switch(route: Route) -> Html {
  ui_debug(
    "router.switch",
    &route.to_path()
  );
  match route {
    | Route::Notes => {
      html! { <NotesPage /> }
    }
    | Route::Tasks => {
      html! { <TasksPage /> }
    }
    | Route::NotFound => {
      html! { <Redirect<Route> to={Route::Notes} /> }
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  html! {
      <BrowserRouter>
          <main class="app">
              <Switch<Route> render={switch} />
          </main>
      </BrowserRouter>
  }
}

pub(crate) fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
