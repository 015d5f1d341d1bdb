// SPDX-License-Identifier: MPL-2.0
//! HTML rendering of the toaster.
//!
//! The markup carries all display state in `data-*` attributes and CSS
//! custom properties, for an external stylesheet to consume. Icons come
//! from an [`AssetLookup`] supplied by the host.

use crate::config::{GAP, TOAST_WIDTH, VIEWPORT_OFFSET};
use crate::toaster::{Toast, ToastType, Toaster};

/// Identifier of the `<ol>` holding the toasts.
pub const TOASTER_LIST_ID: &str = "sonner-toaster-list";

/// Supplies the icon markup shown next to a toast's text.
pub trait AssetLookup {
    fn icon(&self, kind: ToastType) -> Option<String>;
}

/// Lookup that never returns an icon.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetLookup for NoAssets {
    fn icon(&self, _kind: ToastType) -> Option<String> {
        None
    }
}

impl<F> AssetLookup for F
where
    F: Fn(ToastType) -> Option<String>,
{
    fn icon(&self, kind: ToastType) -> Option<String> {
        self(kind)
    }
}

const CLOSE_ICON: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="12" height="12" viewBox="0 0 24 24" "#,
    r#"fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<line x1="18" y1="6" x2="6" y2="18"></line><line x1="6" y1="6" x2="18" y2="18"></line></svg>"#,
);

/// Renders the whole toaster: the labelled section, its list and every
/// attached toast.
#[must_use]
pub fn render_toaster(toaster: &Toaster, assets: &dyn AssetLookup) -> String {
    let options = toaster.options();
    let mut html = String::new();

    html.push_str(r#"<section aria-label="Notifications alt+T" tabindex="-1">"#);
    html.push_str(&format!(
        concat!(
            r#"<ol dir="ltr" tabindex="-1" data-sonner-toaster="true" data-theme="light" "#,
            r#"data-close-button="{}" data-rich-colors="{}" data-y-position="{}" data-x-position="{}" "#,
            r#"style="--front-toast-height: {}px; --offset: {}px; --width: {}px; --gap: {}px;" id="{}">"#,
        ),
        options.close_button,
        options.rich_colors,
        options.position.y.as_str(),
        options.position.x.as_str(),
        toaster.front_toast_height(),
        VIEWPORT_OFFSET,
        TOAST_WIDTH,
        GAP,
        TOASTER_LIST_ID,
    ));
    for toast in toaster.toasts() {
        html.push_str(&render_toast(toaster, toast, assets));
    }
    html.push_str("</ol></section>");
    html
}

/// Renders a single `<li>` toast.
#[must_use]
pub fn render_toast(toaster: &Toaster, toast: &Toast, assets: &dyn AssetLookup) -> String {
    let options = toaster.options();
    let id = escape(toast.id().as_str());
    let mut html = String::new();

    html.push_str(&format!(
        concat!(
            r#"<li aria-live="polite" aria-atomic="true" role="status" tabindex="0" "#,
            r#"data-id="{id}" data-type="{kind}" data-sonner-toast="" data-mounted="{mounted}" "#,
            r#"data-styled="true" data-promise="false" data-removed="{removed}" data-visible="{visible}" "#,
            r#"data-y-position="{y}" data-x-position="{x}" data-index="{index}" data-front="{front}" "#,
            r#"data-swiping="{swiping}" data-dismissible="{dismissible}" data-swipe-out="{swipe_out}" "#,
            r#"data-expanded="{expanded}" "#,
            r#"style="--index: {index}; --toasts-before: {index}; --z-index: {z}; --offset: {offset}px; "#,
            r#"--initial-height: {height}px; --swipe-amount: {swipe}px;">"#,
        ),
        id = id,
        kind = toast.kind().as_str(),
        mounted = toast.is_mounted(),
        removed = toast.is_removed(),
        visible = toast.is_visible(),
        y = options.position.y.as_str(),
        x = options.position.x.as_str(),
        index = toast.index(),
        front = toast.is_front(),
        swiping = toast.is_swiping(),
        dismissible = toast.is_dismissible(),
        swipe_out = toast.is_swipe_out(),
        expanded = toast.is_expanded(),
        z = toast.z_index(),
        offset = toast.offset(),
        height = toast.initial_height(),
        swipe = toast.swipe_amount(),
    ));

    if options.close_button {
        html.push_str(&format!(
            r#"<button aria-label="Close" data-disabled="" data-close-button="" data-toast-id="{}">{}</button>"#,
            id, CLOSE_ICON,
        ));
    }
    if let Some(icon) = assets.icon(toast.kind()) {
        html.push_str(&format!(r#"<div data-icon="">{icon}</div>"#));
    }

    html.push_str(r#"<div data-content="">"#);
    html.push_str(&format!(
        r#"<div data-title="">{}</div>"#,
        escape(toast.message())
    ));
    if let Some(description) = toast.description() {
        html.push_str(&format!(
            r#"<div data-description="">{}</div>"#,
            escape(description)
        ));
    }
    html.push_str("</div></li>");
    html
}

/// Escapes text for use in element content and quoted attribute values.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toaster::{ShowOptions, ToasterOptions};
    use std::time::{Duration, Instant};

    #[test]
    fn toaster_markup_carries_container_settings() {
        let toaster = Toaster::new(ToasterOptions {
            close_button: true,
            rich_colors: true,
            position: "top-center".parse().unwrap(),
            ..ToasterOptions::default()
        });
        let html = render_toaster(&toaster, &NoAssets);

        assert!(html.starts_with(r#"<section aria-label="Notifications alt+T""#));
        assert!(html.contains(r#"data-close-button="true""#));
        assert!(html.contains(r#"data-rich-colors="true""#));
        assert!(html.contains(r#"data-y-position="top""#));
        assert!(html.contains(r#"data-x-position="center""#));
        assert!(html.contains("--gap: 14px;"));
        assert!(html.contains(&format!(r#"id="{}""#, TOASTER_LIST_ID)));
    }

    #[test]
    fn toast_markup_reflects_state() {
        let t0 = Instant::now();
        let mut toaster = Toaster::default();
        let older = toaster.info_at("older", t0);
        toaster.error_at("newer", t0);
        toaster.advance(t0 + Duration::from_millis(16));

        let toast = toaster.get(&older).unwrap();
        let html = render_toast(&toaster, toast, &NoAssets);

        assert!(html.contains(&format!(r#"data-id="{older}""#)));
        assert!(html.contains(r#"data-type="info""#));
        assert!(html.contains(r#"data-mounted="true""#));
        assert!(html.contains(r#"data-index="1""#));
        assert!(html.contains(r#"data-front="false""#));
        assert!(html.contains("--z-index: 1;"));
        assert!(html.contains("--offset: 67px;"));
        assert!(html.contains("--initial-height: 53px;"));
        assert!(!html.contains("aria-label=\"Close\""));
    }

    #[test]
    fn icons_come_from_the_lookup() {
        let t0 = Instant::now();
        let mut toaster = Toaster::default();
        toaster.warning_at("careful", t0);
        toaster.info_at("plain", t0);

        let lookup = |kind: ToastType| (kind == ToastType::Warning).then(|| "<svg/>".to_string());
        let html = render_toaster(&toaster, &lookup);

        assert_eq!(html.matches(r#"<div data-icon="">"#).count(), 1);
        assert!(html.contains(r#"<div data-icon=""><svg/></div>"#));
    }

    #[test]
    fn text_is_escaped() {
        let mut toaster = Toaster::default();
        toaster.show(
            "<b>bold</b>",
            ShowOptions::default().with_description("a \"quoted\" & more"),
        );
        let html = render_toaster(&toaster, &NoAssets);

        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(html.contains("a &quot;quoted&quot; &amp; more"));
        assert!(html.contains(r#"data-type="neutral""#));
    }
}
