//! `<media-control-bar>` rendering
//!
//! Components are taken from the catalog (after the components filter), kept
//! when their tag is allowed and their visibility setting enables them, and
//! rendered in catalog order. Slot content is supplied only by the slots
//! filters and is sanitized before output.

use crate::attrs::esc_attr;
use crate::catalog::{self, ComponentDescriptor};
use crate::hooks::{AllowedTags, Hooks, SlotContent};
use crate::sanitize::SlotSanitizer;
use crate::settings::{controller, Settings};
use std::fmt::Write;
use tracing::trace;

pub const CONTROL_BAR_TAG: &str = "media-control-bar";

/// Builds the control bar for one controller
#[derive(Debug, Clone, Copy)]
pub struct ControlBarBuilder<'a> {
    hooks: &'a Hooks,
}

impl<'a> ControlBarBuilder<'a> {
    #[must_use]
    pub const fn new(hooks: &'a Hooks) -> Self {
        Self { hooks }
    }

    /// Render the control bar from the catalog and the filters
    #[must_use]
    pub fn render(&self, settings: &Settings) -> String {
        let components = self.hooks.components(catalog::components());
        let allowed = self
            .hooks
            .allowed_components(components.iter().map(|c| c.tag.to_string()).collect());

        self.build(&components, settings, &allowed)
    }

    /// Render the control bar for an explicit component list and allowed set
    ///
    /// Returns an empty string when `controls` is disabled or nothing is
    /// allowed. An allowed set that matches no enabled component still yields
    /// the empty wrapper element.
    #[must_use]
    pub fn build(
        &self,
        components: &[ComponentDescriptor],
        settings: &Settings,
        allowed: &[String],
    ) -> String {
        if settings.is_disabled(controller::CONTROLS) {
            trace!("controls disabled, skipping control bar");
            return String::new();
        }

        if allowed.is_empty() {
            trace!("no allowed components, skipping control bar");
            return String::new();
        }

        let mut sanitizer: Option<SlotSanitizer> = None;
        let mut markup = format!("<{CONTROL_BAR_TAG}>");

        for component in components {
            if !allowed.iter().any(|tag| tag == component.tag) {
                trace!(component = component.tag, "component not allowed");
                continue;
            }

            if !is_enabled(component, settings) {
                trace!(component = component.tag, "component disabled");
                continue;
            }

            let slots = if component.slots.is_empty() {
                String::new()
            } else {
                let sanitizer = sanitizer.get_or_insert_with(|| {
                    SlotSanitizer::new(self.hooks.allowed_slot_tags(AllowedTags::new()))
                });
                self.slot_markup(component, settings, sanitizer)
            };

            let _ = write!(markup, "<{tag}>{slots}</{tag}>", tag = component.tag);
        }

        let _ = write!(markup, "</{CONTROL_BAR_TAG}>");
        markup
    }

    fn slot_markup(
        &self,
        component: &ComponentDescriptor,
        settings: &Settings,
        sanitizer: &SlotSanitizer,
    ) -> String {
        let declared: SlotContent = component
            .slots
            .iter()
            .map(|slot| ((*slot).to_string(), String::new()))
            .collect();
        let content = self
            .hooks
            .slots(&component.hook_name(), declared, settings);

        content
            .iter()
            .filter(|(slot, html)| component.has_slot(slot) && !html.is_empty())
            .fold(String::new(), |mut out, (slot, html)| {
                let _ = write!(
                    out,
                    r#"<span slot="{}">{}</span>"#,
                    esc_attr(slot),
                    sanitizer.clean(html)
                );
                out
            })
    }
}

/// Explicit setting wins; an unset setting falls back to the catalog default
fn is_enabled(component: &ComponentDescriptor, settings: &Settings) -> bool {
    match settings.get(component.setting_key) {
        Some(value) => !value.is_false(),
        None => component.default_enabled,
    }
}
