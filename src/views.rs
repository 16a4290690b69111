//! HTML pages
//!
//! Small page builders. Every user-provided string goes through [`escape`].

use std::fmt::Write as _;

use crate::message::RoomSnapshot;

/// Chain Reaction against the computer, served at `/static/game.js`
pub const GAME_SCRIPT: &str = include_str!("../static/game.js");

const GAME_STYLE: &str = "\
.grid-container { position: relative; display: grid; grid-template-columns: repeat(8, 56px); gap: 2px; }
.grid-cell { position: relative; width: 56px; height: 56px; background: #1c1f2b; cursor: pointer; }
.orb-container { position: absolute; inset: 0; }
.orb, .moving-orb { position: absolute; width: 20px; height: 20px; border-radius: 50%; }
.moving-orb { top: 0; left: 0; transition: transform 0.4s ease-in-out; pointer-events: none; }
.stationary-star { position: fixed; border-radius: 50%; background: white; opacity: 0.6; }
#winner-message { display: none; }";

/// Escape text for use inside HTML element content or quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    page_with_head(title, "", body)
}

fn page_with_head(title: &str, head: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n{}</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        head,
        body
    )
}

/// Landing page: pick a name or play against the computer
pub fn index() -> String {
    page(
        "Game Lobby",
        "<h1>Game Lobby</h1>\n\
         <form method=\"post\" action=\"/lobby\">\n\
         <input name=\"username\" placeholder=\"Your name\" required>\n\
         <button type=\"submit\">Play online</button>\n\
         </form>\n\
         <form method=\"post\" action=\"/play_ai\">\n\
         <button type=\"submit\">Play vs AI</button>\n\
         </form>",
    )
}

/// Game page: the board and score elements driven by the game script
pub fn game() -> String {
    page_with_head(
        "Game",
        &format!("<style>\n{}\n</style>\n", GAME_STYLE),
        "<div class=\"stars\"></div>\n\
         <h1>Chain Reaction</h1>\n\
         <p id=\"turn-indicator\"></p>\n\
         <p id=\"winner-message\"></p>\n\
         <p>Player: <span id=\"player1-score\">0</span> | AI: <span id=\"player2-score\">0</span></p>\n\
         <div class=\"grid-container\"></div>\n\
         <p><button id=\"reset-btn\" type=\"button\">Restart</button> <a href=\"/\">Back</a></p>\n\
         <script src=\"/static/game.js\"></script>",
    )
}

/// Lobby page: create a room or join one by code
pub fn lobby(username: Option<&str>) -> String {
    let greeting = match username {
        Some(name) => format!("<h1>Welcome, {}!</h1>", escape(name)),
        None => "<h1>Welcome!</h1>".to_string(),
    };
    page(
        "Lobby",
        &format!(
            "{}\n\
             <form method=\"post\" action=\"/create\">\n\
             <button type=\"submit\">Create room</button>\n\
             </form>\n\
             <form method=\"post\" action=\"/join\">\n\
             <input name=\"room_code\" placeholder=\"Room code\" required>\n\
             <button type=\"submit\">Join room</button>\n\
             </form>",
            greeting
        ),
    )
}

/// Room page: players, ready marks and the host's start button
pub fn room(room: &RoomSnapshot, username: &str) -> String {
    let code = escape(room.code.as_str());
    let action_code = escape(&room.code.path_segment());
    let mut body = format!("<h1>Room {}</h1>\n<ul id=\"players\">\n", code);

    for player in &room.players {
        let mut tags = Vec::new();
        if *player == room.host {
            tags.push("host");
        }
        if room.ready_players.contains(player) {
            tags.push("ready");
        }
        let _ = write!(body, "<li>{}", escape(player));
        if !tags.is_empty() {
            let _ = write!(body, " ({})", tags.join(", "));
        }
        body.push_str("</li>\n");
    }
    body.push_str("</ul>\n");

    // The host never readies up; doing so would keep `all_ready` false.
    let can_ready = room.host != username
        && room.players.iter().any(|p| p == username)
        && !room.ready_players.iter().any(|p| p == username);
    if can_ready {
        let _ = write!(
            body,
            "<form method=\"post\" action=\"/ready/{}\">\n<button type=\"submit\">Ready</button>\n</form>\n",
            action_code
        );
    }

    if room.host == username {
        let disabled = if room.all_ready { "" } else { " disabled" };
        let _ = write!(
            body,
            "<form method=\"post\" action=\"/start/{}\">\n<button type=\"submit\"{}>Start game</button>\n</form>\n",
            action_code, disabled
        );
    }

    let status = if room.all_ready {
        "All players are ready."
    } else {
        "Waiting for players to get ready..."
    };
    let _ = write!(body, "<p id=\"status\">{}</p>", status);

    page(&format!("Room {}", room.code), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoomCode;

    fn snapshot(all_ready: bool) -> RoomSnapshot {
        RoomSnapshot {
            code: RoomCode::from_input("abc123"),
            host: "Alice".to_string(),
            players: vec!["Alice".to_string(), "<b>Bob</b>".to_string()],
            ready_players: vec!["<b>Bob</b>".to_string()],
            all_ready,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_lobby_escapes_username() {
        let html = lobby(Some("<script>"));
        assert!(html.contains("Welcome, &lt;script&gt;!"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_room_page_for_host() {
        let html = room(&snapshot(true), "Alice");
        assert!(html.contains("<li>Alice (host)</li>"));
        assert!(html.contains("<li>&lt;b&gt;Bob&lt;/b&gt; (ready)</li>"));
        assert!(html.contains("action=\"/start/ABC123\""));
        assert!(!html.contains(" disabled"));
        assert!(html.contains("All players are ready."));
    }

    #[test]
    fn test_room_page_hides_ready_for_host() {
        let html = room(&snapshot(false), "Alice");
        assert!(!html.contains("action=\"/ready/"));
    }

    #[test]
    fn test_room_page_ready_for_waiting_guest() {
        let mut snapshot = snapshot(false);
        snapshot.ready_players.clear();
        let html = room(&snapshot, "<b>Bob</b>");
        assert!(html.contains("action=\"/ready/ABC123\""));
    }

    #[test]
    fn test_room_page_encodes_form_actions() {
        let mut snapshot = snapshot(true);
        snapshot.code = RoomCode::from_path("a?b".to_string());
        let html = room(&snapshot, "Alice");
        assert!(html.contains("action=\"/start/a%3Fb\""));
    }

    #[test]
    fn test_game_page_loads_script() {
        let html = game();
        assert!(html.contains("<script src=\"/static/game.js\"></script>"));
        for id in ["turn-indicator", "winner-message", "player1-score", "player2-score", "reset-btn"] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing #{}", id);
        }
        assert!(html.contains("class=\"grid-container\""));
        assert!(GAME_SCRIPT.contains("makeAIMove"));
    }

    #[test]
    fn test_room_page_start_disabled_until_ready() {
        let html = room(&snapshot(false), "Alice");
        assert!(html.contains(" disabled>Start game"));
    }

    #[test]
    fn test_room_page_for_ready_guest() {
        let html = room(&snapshot(true), "<b>Bob</b>");
        assert!(!html.contains("action=\"/start/"));
        assert!(!html.contains("action=\"/ready/"));
    }
}
