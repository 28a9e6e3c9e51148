// Report catalog
// Every canned report is a literal SQL string against the soccer schema

/// Query run by `myquery` when no `--q` is given
pub const DEFAULT_QUERY: &str = "SELECT * FROM Country;";

/// The predefined reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Describe,
    FindCountries,
    FindLeagues,
    ShowTeams,
    ShowMatches,
    SeasonInfo,
}

impl Report {
    pub const ALL: [Report; 6] = [
        Report::Describe,
        Report::FindCountries,
        Report::FindLeagues,
        Report::ShowTeams,
        Report::ShowMatches,
        Report::SeasonInfo,
    ];

    /// Subcommand name on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Report::Describe => "describe",
            Report::FindCountries => "find_countries",
            Report::FindLeagues => "find_leagues",
            Report::ShowTeams => "show_teams",
            Report::ShowMatches => "show_matches",
            Report::SeasonInfo => "season_info",
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            Report::Describe => DESCRIBE,
            Report::FindCountries => FIND_COUNTRIES,
            Report::FindLeagues => FIND_LEAGUES,
            Report::ShowTeams => SHOW_TEAMS,
            Report::ShowMatches => SHOW_MATCHES,
            Report::SeasonInfo => SEASON_INFO,
        }
    }
}

const DESCRIBE: &str = "SELECT name
FROM sqlite_master
WHERE type = 'table';";

const FIND_COUNTRIES: &str = "SELECT *
FROM Country;";

const FIND_LEAGUES: &str = "SELECT Country.name, League.name
FROM League
JOIN Country ON Country.id = League.country_id;";

const SHOW_TEAMS: &str = "SELECT *
FROM Team
ORDER BY team_long_name
LIMIT 10;";

const SHOW_MATCHES: &str = "SELECT Match.id,
       Country.name AS country_name,
       League.name AS league_name,
       season,
       stage,
       date,
       HT.team_long_name AS home_team,
       AT.team_long_name AS away_team,
       home_team_goal,
       away_team_goal
FROM Match
JOIN Country ON Country.id = Match.country_id
JOIN League ON League.id = Match.league_id
LEFT JOIN Team AS HT ON HT.team_api_id = Match.home_team_api_id
LEFT JOIN Team AS AT ON AT.team_api_id = Match.away_team_api_id
WHERE country_name = 'England'
ORDER BY date
LIMIT 10;";

const SEASON_INFO: &str = "SELECT Country.name AS country_name,
       League.name AS league_name,
       season,
       count(DISTINCT stage) AS number_of_stages,
       count(DISTINCT HT.team_long_name) AS number_of_teams,
       avg(home_team_goal) AS avg_home_team_scors,
       avg(away_team_goal) AS avg_away_team_goals,
       avg(home_team_goal - away_team_goal) AS avg_goal_dif,
       avg(home_team_goal + away_team_goal) AS avg_goals,
       sum(home_team_goal + away_team_goal) AS total_goals
FROM Match
JOIN Country ON Country.id = Match.country_id
JOIN League ON League.id = Match.league_id
LEFT JOIN Team AS HT ON HT.team_api_id = Match.home_team_api_id
LEFT JOIN Team AS AT ON AT.team_api_id = Match.away_team_api_id
WHERE country_name IN ('Spain', 'Germany', 'France', 'Italy', 'England')
GROUP BY Country.name, League.name, season
HAVING count(DISTINCT stage) > 10
ORDER BY Country.name, League.name, season DESC;";
