use egui::Pos2;

/// Largest angle covered by one polyline step when flattening an arc.
const MAX_STEP_DEGREES: f32 = 2.0;

/// Anything past one full turn is drawn over the same pixels.
pub const FULL_TURN: f32 = 360.0;

/// Point on a circle for an angle in degrees, 0 at three o'clock and
/// growing clockwise (screen y points down).
pub fn point_on_circle(center: Pos2, radius: f32, degrees: f32) -> Pos2 {
    let radians = degrees.to_radians();
    Pos2::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

/// Flattens an arc into a polyline. The sweep is capped at one full turn
/// either way, so the point count stays bounded whatever the input.
pub fn arc_points(center: Pos2, radius: f32, start_angle: f32, sweep_angle: f32) -> Vec<Pos2> {
    let sweep_angle = sweep_angle.clamp(-FULL_TURN, FULL_TURN);
    let steps = ((sweep_angle.abs() / MAX_STEP_DEGREES).ceil() as usize).max(1);
    (0..=steps)
        .map(|step| {
            let angle = start_angle + sweep_angle * step as f32 / steps as f32;
            point_on_circle(center, radius, angle)
        })
        .collect()
}
