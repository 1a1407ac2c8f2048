//! Integration tests for Sleeper and schedule payload parsing

use gametime_ffl::{
    schedule::types::ScheduleFeed,
    sleeper::types::{Roster, SleeperLeague},
    League, PlayerDirectory, PlayerId, SleeperUser, UserId,
};

#[test]
fn test_full_user_payload() {
    // Sleeper returns more fields than we consume; extras must be ignored
    let json = r#"{
        "username": "gridironguru",
        "user_id": "862136541229834240",
        "is_bot": false,
        "display_name": "GridironGuru",
        "avatar": "8eec5e1f5d2a7a2d"
    }"#;
    let user: SleeperUser = serde_json::from_str(json).unwrap();
    assert_eq!(user.user_id, UserId::new("862136541229834240"));
}

#[test]
fn test_unknown_user_is_null() {
    // Unknown usernames come back as a JSON null body, not a 404
    let user: Option<SleeperUser> = serde_json::from_str("null").unwrap();
    assert!(user.is_none());
}

#[test]
fn test_league_and_roster_join_shapes() {
    let league_json = r#"{
        "league_id": "992049948230975488",
        "name": "Dynasty Degenerates",
        "total_rosters": 12,
        "avatar": "abc",
        "sport": "nfl",
        "season": "2024"
    }"#;
    let raw: SleeperLeague = serde_json::from_str(league_json).unwrap();
    let mut league = League::from(raw);

    let rosters_json = r#"[
        {
            "roster_id": 1,
            "owner_id": "862136541229834240",
            "starters": ["4046", "6794", "KC"],
            "settings": {"wins": 7, "losses": 3, "ties": 1, "fpts": 1204}
        },
        {
            "roster_id": 2,
            "owner_id": null,
            "starters": [],
            "settings": {"wins": 0, "losses": 11, "ties": 0, "fpts": 801}
        }
    ]"#;
    let rosters: Vec<Roster> = serde_json::from_str(rosters_json).unwrap();
    league.rosters = Some(rosters);

    let user = UserId::new("862136541229834240");
    let mine = league.roster_for(&user).unwrap();
    assert_eq!(mine.starters.len(), 3);
    assert_eq!(mine.settings.wins, 7);

    // Orphaned roster never matches any user
    assert!(league.roster_for(&UserId::new("someone_else")).is_none());
}

#[test]
fn test_player_directory_mixed_entries() {
    let json = r#"{
        "4046": {
            "full_name": "Patrick Mahomes",
            "first_name": "Patrick",
            "last_name": "Mahomes",
            "team": "KC",
            "position": "QB",
            "status": "Active",
            "number": 15,
            "search_rank": 22
        },
        "SF": {
            "team": "SF",
            "position": "DEF",
            "status": "Active",
            "number": null,
            "search_rank": null
        },
        "8119": {
            "full_name": "Practice Squad Guy",
            "team": null,
            "position": "WR",
            "status": "Inactive"
        }
    }"#;
    let directory: PlayerDirectory = serde_json::from_str(json).unwrap();

    assert_eq!(
        directory[&PlayerId::new("4046")].display_name(),
        "Patrick Mahomes"
    );
    assert_eq!(directory[&PlayerId::new("SF")].display_name(), "SF Defense");

    let squad_guy = &directory[&PlayerId::new("8119")];
    assert!(squad_guy.team.is_none());
    assert!(squad_guy.is_inactive());
}

#[test]
fn test_schedule_feed_roundtrip() {
    let json = r#"{
        "year": 2024,
        "type": "REG",
        "week": {
            "title": "Week 10",
            "sequence": 10,
            "games": [
                {
                    "id": "sr:match:1",
                    "status": "closed",
                    "scheduled": "2024-11-10T18:00:00+00:00",
                    "home": {"name": "Kansas City Chiefs", "alias": "KC"},
                    "away": {"name": "Denver Broncos", "alias": "DEN"}
                },
                {
                    "status": "scheduled",
                    "scheduled": "2024-11-11T01:20:00+00:00",
                    "home": {"name": "San Francisco 49ers", "alias": "SF"},
                    "away": {"name": "Seattle Seahawks", "alias": "SEA"}
                }
            ]
        }
    }"#;
    let feed: ScheduleFeed = serde_json::from_str(json).unwrap();
    assert_eq!(feed.week.games.len(), 2);
    assert_eq!(feed.week.title.as_deref(), Some("Week 10"));

    // Survives a serialize/deserialize cycle without losing the games
    let reparsed: ScheduleFeed =
        serde_json::from_str(&serde_json::to_string(&feed).unwrap()).unwrap();
    assert_eq!(reparsed.week.games.len(), 2);
    assert_eq!(reparsed.week.games[0].home.alias, "KC");
}

#[test]
fn test_schedule_feed_empty_body() {
    // Proxy may publish an empty object during the offseason
    let feed: ScheduleFeed = serde_json::from_str("{}").unwrap();
    assert!(feed.week.games.is_empty());
}
