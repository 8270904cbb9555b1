use super::model::LiveRoom;

/// Order rooms by broadcast start, most recent first.
///
/// Rooms that started at the same second keep their relative input order
/// (`sort_by` is stable), so repeated runs over the same catalog always
/// print the same report. The input slice is left untouched.
pub fn sort_by_start_time_desc(rooms: &[LiveRoom]) -> Vec<LiveRoom> {
    let mut sorted = rooms.to_vec();
    sorted.sort_by(|a, b| b.started_at.cmp(&a.started_at));
    sorted
}
