// Components module - reusable UI building blocks
//
// The page chrome, top to bottom:
// - Title bar: card owner's name
// - Hero: greeting and tagline
// - Card grid: interest cards with selection
// - Contact: the email affordance
// - Status bar: uptime, clipboard capability, key hints
// - Toast: notification overlay rendered on top of everything
//
// Each component is a focused, single-responsibility module.

pub mod card_grid;
pub mod contact_panel;
pub mod hero;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
