//! Plain-text rendering of the view models

use std::io::{self, Write};

use crate::session::{MarkerVariant, SpotSession};
use crate::views::{FinalizationView, ListEntry, MapBounds, MapView, PlanView, SpotPopup};

pub fn render_filters(out: &mut impl Write, session: &SpotSession) -> io::Result<()> {
    let criteria = session.criteria();
    writeln!(
        out,
        "Filters: accessible-only={} min-rating={:.1}",
        if criteria.accessible_only() { "on" } else { "off" },
        criteria.min_rating()
    )
}

pub fn render_list(out: &mut impl Write, entries: &[ListEntry]) -> io::Result<()> {
    writeln!(out, "Tourist Spots ({})", entries.len())?;
    if entries.is_empty() {
        writeln!(out, "  No spots match the current filters.")?;
    }
    for entry in entries {
        let marker = if entry.in_plan { '*' } else { ' ' };
        writeln!(
            out,
            " {marker}[{}] {} - {}",
            entry.id, entry.name, entry.rating_label
        )?;
    }
    Ok(())
}

pub fn render_plan(out: &mut impl Write, view: &PlanView) -> io::Result<()> {
    writeln!(out, "My Travel Plan")?;
    if let Some(hint) = view.empty_hint {
        writeln!(out, "  {hint}")?;
    }
    for (position, entry) in view.entries.iter().enumerate() {
        writeln!(
            out,
            "  {}. [{}] {} - {}",
            position + 1,
            entry.id,
            entry.name,
            entry.rating_label
        )?;
    }
    if view.can_finalize {
        writeln!(out, "  (type 'done' to finalise)")?;
    }
    Ok(())
}

pub fn render_bounds(out: &mut impl Write, bounds: &MapBounds) -> io::Result<()> {
    writeln!(
        out,
        "Fit map to ({:.4}, {:.4}) - ({:.4}, {:.4})",
        bounds.south_west.latitude,
        bounds.south_west.longitude,
        bounds.north_east.latitude,
        bounds.north_east.longitude
    )
}

pub fn render_map(out: &mut impl Write, view: &MapView) -> io::Result<()> {
    writeln!(out, "Map markers ({})", view.markers.len())?;
    // selected markers are drawn last so they sit on top
    let mut markers: Vec<_> = view.markers.iter().collect();
    markers.sort_by_key(|m| m.z_index_offset);
    for marker in markers {
        let icon = match marker.variant {
            MarkerVariant::Default => "o",
            MarkerVariant::Selected => "@",
        };
        writeln!(
            out,
            "  {icon} [{}] {} at {:.4}, {:.4}",
            marker.id, marker.popup.name, marker.position.latitude, marker.position.longitude
        )?;
    }
    if let Some(bounds) = &view.fit_bounds {
        render_bounds(out, bounds)?;
    }
    Ok(())
}

pub fn render_popup(out: &mut impl Write, popup: &SpotPopup) -> io::Result<()> {
    writeln!(out, "{}", popup.name)?;
    for line in popup.lines() {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

pub fn render_finalization(out: &mut impl Write, view: &FinalizationView) -> io::Result<()> {
    writeln!(out, "== {} ==", view.title)?;
    writeln!(out, "{}", view.body)?;
    writeln!(out, "Stops: {}", view.stops.join(" -> "))?;
    for leg in &view.legs {
        writeln!(out, "  [{}] -> [{}]: {:.1} km", leg.from, leg.to, leg.distance_km)?;
    }
    writeln!(out, "Straight-line total: {:.1} km", view.total_distance_km)?;
    writeln!(out, "(type 'close' to return)")
}

pub fn render_notification(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "! {message}")
}
