//! Parsing tests against realistic Sleeper payload shapes.

use super::*;

#[test]
fn test_parse_user() {
    let json = r#"{
        "user_id": "862136541229834240",
        "display_name": "GridironGuru",
        "avatar": "8eec5e1f5d2a7a2d",
        "username": "gridironguru"
    }"#;
    let user: SleeperUser = serde_json::from_str(json).unwrap();
    assert_eq!(user.user_id, UserId::new("862136541229834240"));
    assert_eq!(user.display_name_or_default(), "GridironGuru");
    assert_eq!(user.avatar.as_deref(), Some("8eec5e1f5d2a7a2d"));
}

#[test]
fn test_parse_user_without_display_name() {
    let json = r#"{"user_id": "1", "avatar": null}"#;
    let user: SleeperUser = serde_json::from_str(json).unwrap();
    assert_eq!(user.display_name_or_default(), "Unknown User");
    assert!(user.avatar.is_none());
    assert!(user.avatar_url().is_none());
}

#[test]
fn test_avatar_url() {
    let user = SleeperUser {
        user_id: UserId::new("1"),
        display_name: None,
        avatar: Some("8eec5e1f5d2a7a2d".to_string()),
    };
    assert_eq!(
        user.avatar_url().as_deref(),
        Some("https://sleepercdn.com/avatars/8eec5e1f5d2a7a2d")
    );
}

#[test]
fn test_parse_league_list() {
    let json = r#"[
        {
            "league_id": "992049948230975488",
            "name": "Dynasty Degenerates",
            "total_rosters": 12,
            "avatar": "abc123",
            "season": "2024",
            "status": "in_season"
        },
        {
            "league_id": "992049948230975489",
            "name": "Work League",
            "total_rosters": 10,
            "avatar": null
        }
    ]"#;
    let raw: Vec<SleeperLeague> = serde_json::from_str(json).unwrap();
    let leagues: Vec<League> = raw.into_iter().map(League::from).collect();

    assert_eq!(leagues.len(), 2);
    assert_eq!(leagues[0].league_name, "Dynasty Degenerates");
    assert_eq!(leagues[0].number_of_teams, 12);
    // Rosters start unloaded
    assert!(leagues[0].rosters.is_none());
    assert!(leagues[1].avatar.is_none());
}

#[test]
fn test_parse_roster_with_settings() {
    let json = r#"{
        "owner_id": "862136541229834240",
        "starters": ["4046", "6794", "KC"],
        "players": ["4046", "6794", "KC", "8119"],
        "settings": {"wins": 7, "losses": 3, "ties": 1, "fpts": 1204}
    }"#;
    let roster: Roster = serde_json::from_str(json).unwrap();
    assert_eq!(roster.owner_id, Some(UserId::new("862136541229834240")));
    assert_eq!(roster.starters.len(), 3);
    assert_eq!(roster.settings.wins, 7);
    assert_eq!(roster.settings.fpts, 1204);
}

#[test]
fn test_parse_roster_orphaned() {
    // Orphaned rosters come back with a null owner
    let json = r#"{"owner_id": null, "starters": ["4046"], "settings": {}}"#;
    let roster: Roster = serde_json::from_str(json).unwrap();
    assert!(roster.owner_id.is_none());
    assert_eq!(roster.settings.wins, 0);
}

#[test]
fn test_roster_for_first_match_wins() {
    let user = UserId::new("u1");
    let mk = |wins: u16| Roster {
        owner_id: Some(user.clone()),
        starters: vec![],
        settings: RosterSettings {
            wins,
            ..Default::default()
        },
    };
    let league = League {
        league_id: LeagueId::new("L1"),
        league_name: "Dup League".to_string(),
        number_of_teams: 2,
        avatar: None,
        rosters: Some(vec![mk(1), mk(2)]),
    };
    assert_eq!(league.roster_for(&user).unwrap().settings.wins, 1);
}

#[test]
fn test_roster_for_unloaded_league() {
    let league = League {
        league_id: LeagueId::new("L1"),
        league_name: "Pending".to_string(),
        number_of_teams: 10,
        avatar: None,
        rosters: None,
    };
    assert!(league.roster_for(&UserId::new("u1")).is_none());
}

#[test]
fn test_parse_player_record() {
    let json = r#"{
        "full_name": "Patrick Mahomes",
        "team": "KC",
        "position": "QB",
        "status": "Active",
        "number": 15,
        "search_rank": 22,
        "age": 29,
        "injury_status": null
    }"#;
    let player: PlayerRecord = serde_json::from_str(json).unwrap();
    assert_eq!(player.display_name(), "Patrick Mahomes");
    assert!(!player.is_defense());
    assert!(!player.is_inactive());
    assert_eq!(player.search_rank, Some(22));
}

#[test]
fn test_parse_defense_record() {
    // DEF entries carry no full_name; they are named after their team
    let json = r#"{"team": "SF", "position": "DEF", "status": "Active"}"#;
    let player: PlayerRecord = serde_json::from_str(json).unwrap();
    assert!(player.is_defense());
    assert_eq!(player.display_name(), "SF Defense");
    assert!(player.number.is_none());
    assert!(player.search_rank.is_none());
}

#[test]
fn test_parsed_position() {
    let qb = PlayerRecord {
        position: Some("QB".to_string()),
        ..Default::default()
    };
    assert_eq!(qb.parsed_position(), Some(Position::QB));
    assert!(!qb.is_defense());

    // Positions outside the displayed set parse to None but keep the raw
    // string for the table
    let long_snapper = PlayerRecord {
        position: Some("LS".to_string()),
        ..Default::default()
    };
    assert_eq!(long_snapper.parsed_position(), None);
    assert!(!long_snapper.is_defense());
    assert_eq!(long_snapper.position.as_deref(), Some("LS"));

    let none = PlayerRecord::default();
    assert_eq!(none.parsed_position(), None);
}

#[test]
fn test_defense_aliases_count_as_team_units() {
    for alias in ["DEF", "DST", "D/ST"] {
        let unit = PlayerRecord {
            team: Some("KC".to_string()),
            position: Some(alias.to_string()),
            ..Default::default()
        };
        assert!(unit.is_defense(), "{} should be a team unit", alias);
        assert_eq!(unit.display_name(), "KC Defense");
    }
}

#[test]
fn test_defense_without_team() {
    let player = PlayerRecord {
        position: Some("DEF".to_string()),
        ..Default::default()
    };
    assert_eq!(player.display_name(), "Unknown Defense");
}

#[test]
fn test_unknown_player_display_name() {
    let player = PlayerRecord::default();
    assert_eq!(player.display_name(), "Unknown Player");
}

#[test]
fn test_inactive_status() {
    let mut player = PlayerRecord {
        status: Some("Injured Reserve".to_string()),
        ..Default::default()
    };
    assert!(player.is_inactive());
    player.status = None;
    assert!(!player.is_inactive());
}

#[test]
fn test_parse_directory_map() {
    let json = r#"{
        "4046": {"full_name": "A", "team": "KC", "position": "QB", "search_rank": 5},
        "KC": {"team": "KC", "position": "DEF"}
    }"#;
    let directory: PlayerDirectory = serde_json::from_str(json).unwrap();
    assert_eq!(directory.len(), 2);
    assert!(directory[&PlayerId::new("KC")].is_defense());
}
