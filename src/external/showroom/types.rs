use serde::Deserialize;

use crate::catalog::{Category, GenreBucket, LiveRoom, RoomCatalog};

/// Body of `GET /api/live/onlives`
#[derive(Debug, Deserialize)]
pub struct OnlivesResponse {
    #[serde(default)]
    pub onlives: Vec<OnliveGenre>,
}

#[derive(Debug, Deserialize)]
pub struct OnliveGenre {
    pub genre_id: i64,
    pub genre_name: String,
    #[serde(default)]
    pub lives: Vec<OnliveRoom>,
}

#[derive(Debug, Deserialize)]
pub struct OnliveRoom {
    pub room_id: u64,
    pub main_name: String,
    pub started_at: i64,
    /// 0 for free (amateur) rooms, 1 for official ones
    #[serde(default)]
    pub official_lv: i64,
}

impl OnliveRoom {
    fn category(&self) -> Category {
        if self.official_lv == 0 {
            Category::Free
        } else {
            Category::Official
        }
    }
}

impl From<OnlivesResponse> for RoomCatalog {
    fn from(response: OnlivesResponse) -> Self {
        let buckets = response
            .onlives
            .into_iter()
            .map(|genre| {
                let rooms = genre
                    .lives
                    .into_iter()
                    .map(|live| LiveRoom {
                        category: live.category(),
                        room_id: live.room_id,
                        main_name: live.main_name,
                        started_at: live.started_at.max(0),
                        genre_id: genre.genre_id,
                        genre_name: genre.genre_name.clone(),
                    })
                    .collect();
                GenreBucket::new(genre.genre_id, genre.genre_name, rooms)
            })
            .collect();

        RoomCatalog::new(buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "onlives": [
            {
                "genre_id": 102,
                "genre_name": "アイドル",
                "lives": [
                    {"room_id": 11, "main_name": "A", "started_at": 1700000100, "official_lv": 0, "view_num": 12},
                    {"room_id": 12, "main_name": "B", "started_at": 1700000300, "official_lv": 1, "room_url_key": "b_room"}
                ]
            },
            {
                "genre_id": 103,
                "genre_name": "タレント・モデル",
                "lives": [
                    {"room_id": 21, "main_name": "C", "started_at": 1700000200}
                ]
            },
            {"genre_id": 104, "genre_name": "音楽"}
        ]
    }"#;

    #[test]
    fn test_parse_onlives() {
        let response: OnlivesResponse = serde_json::from_str(BODY).unwrap();
        assert_eq!(response.onlives.len(), 3);
        assert_eq!(response.onlives[0].lives.len(), 2);
        assert_eq!(response.onlives[0].lives[1].main_name, "B");
        assert_eq!(response.onlives[0].lives[1].official_lv, 1);
        assert!(response.onlives[2].lives.is_empty());
    }

    #[test]
    fn test_convert_to_catalog() {
        let response: OnlivesResponse = serde_json::from_str(BODY).unwrap();
        let catalog = RoomCatalog::from(response);

        assert_eq!(catalog.buckets().len(), 3);
        assert_eq!(catalog.room_count(), 3);

        let rooms: Vec<&LiveRoom> = catalog.rooms().collect();
        assert_eq!(rooms[0].main_name, "A");
        assert_eq!(rooms[0].category, Category::Free);
        assert_eq!(rooms[0].genre_name, "アイドル");
        assert_eq!(rooms[1].category, Category::Official);
        assert_eq!(rooms[2].category, Category::Free);
        assert_eq!(rooms[2].genre_id, 103);
        assert_eq!(rooms[2].started_at, 1700000200);
    }

    #[test]
    fn test_missing_onlives_is_empty_catalog() {
        let response: OnlivesResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(RoomCatalog::from(response).room_count(), 0);
    }

    #[test]
    fn test_negative_start_clamped() {
        let body = r#"{"onlives":[{"genre_id":1,"genre_name":"g","lives":[
            {"room_id":1,"main_name":"x","started_at":-5}
        ]}]}"#;
        let response: OnlivesResponse = serde_json::from_str(body).unwrap();
        let catalog = RoomCatalog::from(response);
        assert_eq!(catalog.rooms().next().unwrap().started_at, 0);
    }
}
