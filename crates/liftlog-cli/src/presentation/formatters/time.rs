/// Format a session duration as "48m" or "1h 2m".
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, remaining)
    }
}
