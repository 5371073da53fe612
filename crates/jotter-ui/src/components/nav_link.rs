use yew::{
  Html,
  Properties,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
  pub to:    Route,
  pub label: &'static str
}

#[function_component(NavLink)]
pub fn nav_link(
  props: &NavLinkProps
) -> Html {
  html! {
      <nav class="nav">
          <Link<Route> to={props.to}>{ props.label }</Link<Route>>
      </nav>
  }
}
