use regex::Regex;

use crate::{
    assets::store::SpriteHandle,
    classify::{
        params::{CompiledButtonPatterns, CompiledPatterns, CompiledTogglePatterns},
        widget::{WidgetDescriptor, WidgetKind},
    },
    document::{hierarchy::PathedLayer, model::Layer},
    foundation::error::ConvertResult,
};

/// Turn pathed leaves into typed widget descriptors.
///
/// Leaves are grouped by exact path in first-seen order; within a group the
/// original bottom-to-top order is kept. Per group the composite rules run in
/// fixed order (button, then toggle) against lowercased names, consuming the
/// siblings they claim; every unconsumed leaf becomes a text or image widget.
/// Groups with an empty path have no enclosing folder to name a composite
/// after and skip the composite rules.
///
/// `resolve` is the sprite cache hook; its hard errors abort classification.
pub fn classify<R>(
    pathed: &[PathedLayer<'_>],
    patterns: &CompiledPatterns,
    default_font: &str,
    mut resolve: R,
) -> ConvertResult<Vec<WidgetDescriptor>>
where
    R: FnMut(&Layer) -> ConvertResult<Option<SpriteHandle>>,
{
    let mut groups: Vec<(&str, Vec<&PathedLayer<'_>>)> = Vec::new();
    for entry in pathed {
        match groups.iter_mut().find(|(path, _)| *path == entry.path.as_str()) {
            Some((_, members)) => members.push(entry),
            None => groups.push((entry.path.as_str(), vec![entry])),
        }
    }

    let mut widgets = Vec::new();
    for (path, members) in &groups {
        let lower: Vec<String> = members
            .iter()
            .map(|m| m.layer.name.to_lowercase())
            .collect();
        let mut consumed = vec![false; members.len()];

        if !path.is_empty() {
            let (parent, group_name) = split_last_segment(path);
            let group_lower = group_name.to_lowercase();

            if patterns.button.pattern.is_match(&group_lower)
                && let Some(widget) = extract_button(
                    members,
                    &lower,
                    &mut consumed,
                    &patterns.button,
                    parent,
                    group_name,
                    &mut resolve,
                )?
            {
                widgets.push(widget);
            }
            if patterns.toggle.pattern.is_match(&group_lower)
                && let Some(widget) = extract_toggle(
                    members,
                    &lower,
                    &mut consumed,
                    &patterns.toggle,
                    parent,
                    group_name,
                    &mut resolve,
                )?
            {
                widgets.push(widget);
            }
        }

        for (i, entry) in members.iter().enumerate() {
            if consumed[i] {
                continue;
            }
            let kind = match &entry.layer.text {
                Some(rich) => WidgetKind::Text {
                    rich: rich.clone(),
                    font: default_font.to_string(),
                },
                None => WidgetKind::Image {
                    sprite: resolve(entry.layer)?,
                },
            };
            widgets.push(WidgetDescriptor {
                name: entry.layer.name.clone(),
                path: (*path).to_string(),
                rect: entry.layer.rect,
                kind,
            });
        }
    }

    Ok(widgets)
}

/// Split a path into its parent prefix and last segment.
fn split_last_segment(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}

/// Button rule: consume the sibling subset matching the button key pattern.
///
/// Role layers are picked first-match-wins; later siblings matching an already
/// claimed role are ignored but still consumed. Normal is the first subset
/// member matching no role pattern. Without a normal layer the whole rule is a
/// no-op and the siblings fall through to leaf classification.
fn extract_button<R>(
    members: &[&PathedLayer<'_>],
    lower: &[String],
    consumed: &mut [bool],
    patterns: &CompiledButtonPatterns,
    parent: &str,
    group_name: &str,
    resolve: &mut R,
) -> ConvertResult<Option<WidgetDescriptor>>
where
    R: FnMut(&Layer) -> ConvertResult<Option<SpriteHandle>>,
{
    let subset: Vec<usize> = (0..members.len())
        .filter(|&i| !consumed[i] && patterns.pattern.is_match(&lower[i]))
        .collect();
    if subset.is_empty() {
        return Ok(None);
    }

    let pressed = first_role(&subset, lower, &patterns.pressed);
    let highlighted = first_role(&subset, lower, &patterns.highlighted);
    let disabled = first_role(&subset, lower, &patterns.disabled);
    let normal = subset.iter().copied().find(|&i| {
        !patterns.pressed.is_match(&lower[i])
            && !patterns.highlighted.is_match(&lower[i])
            && !patterns.disabled.is_match(&lower[i])
    });

    let Some(normal) = normal else {
        tracing::debug!(
            group = group_name,
            "button group has no normal-state layer, skipped"
        );
        return Ok(None);
    };

    let kind = WidgetKind::Button {
        normal: resolve(members[normal].layer)?,
        pressed: resolve_role(members, pressed, resolve)?,
        highlighted: resolve_role(members, highlighted, resolve)?,
        disabled: resolve_role(members, disabled, resolve)?,
    };
    for i in subset {
        consumed[i] = true;
    }
    Ok(Some(WidgetDescriptor {
        name: group_name.to_string(),
        path: parent.to_string(),
        rect: members[normal].layer.rect,
        kind,
    }))
}

/// Toggle rule: same consumption shape as the button rule, but a toggle is
/// emitted whenever the subset is non-empty, with `None` for missing roles.
fn extract_toggle<R>(
    members: &[&PathedLayer<'_>],
    lower: &[String],
    consumed: &mut [bool],
    patterns: &CompiledTogglePatterns,
    parent: &str,
    group_name: &str,
    resolve: &mut R,
) -> ConvertResult<Option<WidgetDescriptor>>
where
    R: FnMut(&Layer) -> ConvertResult<Option<SpriteHandle>>,
{
    let subset: Vec<usize> = (0..members.len())
        .filter(|&i| !consumed[i] && patterns.pattern.is_match(&lower[i]))
        .collect();
    if subset.is_empty() {
        return Ok(None);
    }

    let background = first_role(&subset, lower, &patterns.background);
    let checkmark = first_role(&subset, lower, &patterns.checkmark);
    let anchor = background.or(checkmark).unwrap_or(subset[0]);

    let kind = WidgetKind::Toggle {
        background: resolve_role(members, background, resolve)?,
        checkmark: resolve_role(members, checkmark, resolve)?,
    };
    for i in subset {
        consumed[i] = true;
    }
    Ok(Some(WidgetDescriptor {
        name: group_name.to_string(),
        path: parent.to_string(),
        rect: members[anchor].layer.rect,
        kind,
    }))
}

fn first_role(subset: &[usize], lower: &[String], role: &Regex) -> Option<usize> {
    subset.iter().copied().find(|&i| role.is_match(&lower[i]))
}

fn resolve_role<R>(
    members: &[&PathedLayer<'_>],
    index: Option<usize>,
    resolve: &mut R,
) -> ConvertResult<Option<SpriteHandle>>
where
    R: FnMut(&Layer) -> ConvertResult<Option<SpriteHandle>>,
{
    match index {
        Some(i) => resolve(members[i].layer),
        None => Ok(None),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/classifier.rs"]
mod tests;
