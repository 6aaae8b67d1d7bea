use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Drops `data-hk` attributes and comment nodes so two renders can be
/// compared structurally.
pub fn strip_hydration_markers(html: &str) -> String {
    const ATTR: &str = " data-hk=\"";
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    loop {
        let comment = rest.find("<!--");
        let attr = rest.find(ATTR);
        let (start, is_comment) = match (comment, attr) {
            (Some(c), Some(a)) if c < a => (c, true),
            (_, Some(a)) => (a, false),
            (Some(c), None) => (c, true),
            (None, None) => break,
        };
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = if is_comment {
            tail.find("-->").map(|i| i + "-->".len())
        } else {
            tail[ATTR.len()..].find('"').map(|i| ATTR.len() + i + 1)
        };
        match end {
            Some(end) => rest = &tail[end..],
            None => {
                rest = tail;
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_hydration_markers_removes_keys_and_comments() {
        let html = r#"<div data-hk="0-0-1" class="a"><!--hk=0-0-2|leptos-view|open-->x<!--hk=0-0-2|close--></div>"#;
        assert_eq!(strip_hydration_markers(html), r#"<div class="a">x</div>"#);
    }
}
