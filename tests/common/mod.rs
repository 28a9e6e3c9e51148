// Fixture database shaped like the European soccer dataset
#![allow(dead_code)]

use rusqlite::{params, Connection};
use std::path::Path;
use tempfile::TempDir;

pub const TABLES: [&str; 5] = ["Country", "League", "Match", "Player", "Team"];

pub const COUNTRIES: [(i64, &str); 7] = [
    (1, "Belgium"),
    (1729, "England"),
    (4769, "France"),
    (7809, "Germany"),
    (10257, "Italy"),
    (21518, "Spain"),
    (24558, "Switzerland"),
];

/// (team_api_id, long name, short name, country id)
pub const TEAMS: [(i64, &str, &str, i64); 13] = [
    (8455, "Chelsea", "CHE", 1729),
    (10260, "Manchester United", "MUN", 1729),
    (8650, "Liverpool", "LIV", 1729),
    (9825, "Arsenal", "ARS", 1729),
    (8634, "FC Barcelona", "BAR", 21518),
    (8633, "Real Madrid CF", "REA", 21518),
    (9906, "Atlético Madrid", "AMA", 21518),
    (9847, "Paris Saint-Germain", "PSG", 4769),
    (8592, "Olympique de Marseille", "MAR", 4769),
    (9956, "Grasshopper Club Zürich", "GRA", 24558),
    (10243, "FC Zürich", "ZUR", 24558),
    (9987, "KRC Genk", "GEN", 1),
    (8635, "RSC Anderlecht", "AND", 1),
];

/// (country id, season, number of stages)
pub const SEASONS: [(i64, &str, i64); 6] = [
    (1729, "2008/2009", 12),
    (1729, "2009/2010", 5),
    (1729, "2010/2011", 12),
    (21518, "2008/2009", 11),
    (4769, "2008/2009", 10),
    (24558, "2008/2009", 15),
];

pub fn home_goals(stage: i64) -> i64 {
    (stage * 7) % 4
}

pub fn away_goals(stage: i64) -> i64 {
    (stage * 5) % 3
}

/// A temp dir holding `database.sqlite`, removed on drop
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        build(&dir.path().join("database.sqlite"));
        Self { dir }
    }

    pub fn db_path(&self) -> std::path::PathBuf {
        self.dir.path().join("database.sqlite")
    }

    pub fn connection(&self) -> Connection {
        Connection::open(self.db_path()).unwrap()
    }
}

pub fn build(path: &Path) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE Country (id INTEGER PRIMARY KEY, name TEXT UNIQUE);
         CREATE TABLE League (
             id INTEGER PRIMARY KEY,
             country_id INTEGER REFERENCES Country(id),
             name TEXT UNIQUE
         );
         CREATE TABLE Match (
             id INTEGER PRIMARY KEY,
             country_id INTEGER REFERENCES Country(id),
             league_id INTEGER REFERENCES League(id),
             season TEXT,
             stage INTEGER,
             date TEXT,
             match_api_id INTEGER UNIQUE,
             home_team_api_id INTEGER,
             away_team_api_id INTEGER,
             home_team_goal INTEGER,
             away_team_goal INTEGER
         );
         CREATE TABLE Player (id INTEGER PRIMARY KEY, player_name TEXT);
         CREATE TABLE Team (
             id INTEGER PRIMARY KEY,
             team_api_id INTEGER UNIQUE,
             team_fifa_api_id INTEGER,
             team_long_name TEXT,
             team_short_name TEXT
         );",
    )
    .unwrap();

    for (id, name) in COUNTRIES {
        conn.execute("INSERT INTO Country (id, name) VALUES (?1, ?2)", params![id, name])
            .unwrap();
        conn.execute(
            "INSERT INTO League (id, country_id, name) VALUES (?1, ?1, ?2)",
            params![id, format!("{} League", name)],
        )
        .unwrap();
    }

    for (i, (api_id, long, short, _)) in TEAMS.iter().enumerate() {
        conn.execute(
            "INSERT INTO Team (id, team_api_id, team_fifa_api_id, team_long_name, team_short_name)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![i as i64 + 1, api_id, 100 + i as i64, long, short],
        )
        .unwrap();
    }

    let mut match_api_id = 480_000;
    for (country_id, season, stages) in SEASONS {
        let teams: Vec<i64> = TEAMS
            .iter()
            .filter(|t| t.3 == country_id)
            .map(|t| t.0)
            .collect();
        let year: i64 = season[..4].parse().unwrap();

        // Inserted last stage first so ORDER BY has work to do
        for stage in (1..=stages).rev() {
            let date = format!(
                "{}-{:02}-{:02} 00:00:00",
                year,
                8 + (stage - 1) / 28,
                1 + (stage - 1) % 28
            );
            let home = teams[stage as usize % teams.len()];
            let away = teams[(stage as usize + 1) % teams.len()];
            match_api_id += 1;
            conn.execute(
                "INSERT INTO Match (country_id, league_id, season, stage, date, match_api_id,
                                    home_team_api_id, away_team_api_id,
                                    home_team_goal, away_team_goal)
                 VALUES (?1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    country_id,
                    season,
                    stage,
                    date,
                    match_api_id,
                    home,
                    away,
                    home_goals(stage),
                    away_goals(stage)
                ],
            )
            .unwrap();
        }
    }
}
