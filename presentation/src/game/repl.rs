//! REPL driving a [`GameSession`] from a line-based terminal
//!
//! Screens, in order:
//!
//! 1. player count prompt (Enter accepts the default)
//! 2. per player: intro, Enter, word, Enter
//! 3. reveal summary, then the menu: next round / reset count / quit
//!
//! Input and output are generic so the whole loop runs against in-memory
//! buffers in tests. End of input quits at any prompt.

use crate::config::DisplayConfig;
use crate::output::console::ConsoleFormatter;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};
use undercover_application::{GameError, GameSession, WordStore};
use undercover_domain::{OutputFormat, PlayerCount, RandomSource, RevealView, SubPhase};

/// Choice made at the end-of-round menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    NextRound,
    ResetPlayers,
    Quit,
}

/// Interactive game loop
pub struct GameRepl<S: WordStore, R: RandomSource, I: BufRead, O: Write> {
    session: GameSession<S, R>,
    input: I,
    output: O,
    display: DisplayConfig,
    default_players: PlayerCount,
    initial_players: Option<PlayerCount>,
}

impl<S: WordStore, R: RandomSource, I: BufRead, O: Write> GameRepl<S, R, I, O> {
    /// Create a new GameRepl
    pub fn new(session: GameSession<S, R>, input: I, output: O) -> Self {
        Self {
            session,
            input,
            output,
            display: DisplayConfig::default(),
            default_players: PlayerCount::DEFAULT,
            initial_players: None,
        }
    }

    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Player count offered at the prompt
    pub fn with_default_players(mut self, players: PlayerCount) -> Self {
        self.default_players = players;
        self
    }

    /// Skip the prompt for the first round
    pub fn with_initial_players(mut self, players: Option<PlayerCount>) -> Self {
        self.initial_players = players;
        self
    }

    pub fn session(&self) -> &GameSession<S, R> {
        &self.session
    }

    pub fn into_parts(self) -> (GameSession<S, R>, O) {
        (self.session, self.output)
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", ConsoleFormatter::title())?;

        loop {
            let players = match self.initial_players.take() {
                Some(players) => players,
                None => match self.ask_player_count()? {
                    Some(players) => players,
                    None => return Ok(()),
                },
            };

            let mut result = self.session.start_round(players);
            loop {
                match result {
                    Ok(_) => {
                        if !self.play_round()? {
                            return Ok(());
                        }
                    }
                    Err(e) => self.report(&e)?,
                }

                match self.ask_menu()? {
                    Some(MenuChoice::NextRound) => result = self.session.next_round(),
                    Some(MenuChoice::ResetPlayers) => {
                        self.session.reset_player_count();
                        break;
                    }
                    Some(MenuChoice::Quit) | None => return Ok(()),
                }
            }
        }
    }

    /// Walk every player through intro and word, then show the reveal.
    ///
    /// Returns `false` if input ended mid-round.
    fn play_round(&mut self) -> io::Result<bool> {
        let mut view = match self.session.current_reveal() {
            Ok(view) => view,
            Err(e) => {
                self.report(&e)?;
                return Ok(true);
            }
        };

        loop {
            let screen = match &view {
                RevealView::Player {
                    player_number,
                    sub_phase: SubPhase::Intro,
                    ..
                } => ConsoleFormatter::intro(*player_number),
                RevealView::Player {
                    player_number,
                    sub_phase: SubPhase::Word,
                    word,
                    is_last_player,
                } => ConsoleFormatter::word(
                    *player_number,
                    word.as_deref().unwrap_or_default(),
                    *is_last_player,
                ),
                RevealView::Reveal => break,
            };

            self.clear_screen()?;
            write!(self.output, "{}", screen)?;
            self.output.flush()?;

            if self.read_line()?.is_none() {
                return Ok(false);
            }

            view = match self.session.proceed() {
                Ok(view) => view,
                Err(e) => {
                    self.report(&e)?;
                    return Ok(true);
                }
            };
        }

        self.clear_screen()?;
        match self.session.final_summary() {
            Ok(summary) => {
                let rendered = match self.display.format {
                    OutputFormat::Text => ConsoleFormatter::summary(&summary),
                    OutputFormat::Json => ConsoleFormatter::summary_json(&summary),
                };
                writeln!(self.output, "{}", rendered)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn ask_player_count(&mut self) -> io::Result<Option<PlayerCount>> {
        loop {
            write!(
                self.output,
                "{}",
                ConsoleFormatter::player_count_prompt(self.default_players)
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(self.default_players));
            }

            match line.parse::<PlayerCount>() {
                Ok(players) => return Ok(Some(players)),
                Err(e) => {
                    debug!("Rejected player count: {}", e);
                    writeln!(self.output, "{}", ConsoleFormatter::invalid_player_count(&line))?;
                }
            }
        }
    }

    fn ask_menu(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            write!(
                self.output,
                "{}",
                ConsoleFormatter::menu(self.session.remaining_pairs())
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            // A stray Enter must not burn a pair
            let choice = match line.to_lowercase().as_str() {
                "" => continue,
                "n" | "next" => MenuChoice::NextRound,
                "r" | "reset" => MenuChoice::ResetPlayers,
                "q" | "quit" | "exit" => MenuChoice::Quit,
                other => {
                    writeln!(self.output, "{}", ConsoleFormatter::unknown_choice(other))?;
                    continue;
                }
            };
            return Ok(Some(choice));
        }
    }

    /// Read one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if self.display.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn report(&mut self, error: &GameError) -> io::Result<()> {
        if error.is_exhausted() {
            let store = self.session.pool().store();
            writeln!(
                self.output,
                "{}",
                ConsoleFormatter::exhausted(&store.active_location(), &store.used_location())
            )
        } else {
            warn!("{}", error);
            writeln!(self.output, "{}", ConsoleFormatter::error(&error.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use undercover_application::{InMemoryWordStore, PoolSettings};
    use undercover_domain::ScriptedRandom;

    type TestRepl = GameRepl<InMemoryWordStore, ScriptedRandom, Cursor<Vec<u8>>, Vec<u8>>;

    fn repl(pool: &str, rng: ScriptedRandom, input: &str) -> TestRepl {
        let session =
            GameSession::load(InMemoryWordStore::new(pool), rng, PoolSettings::default()).unwrap();
        GameRepl::new(session, Cursor::new(input.as_bytes().to_vec()), Vec::new())
            .with_display(DisplayConfig::default().with_clear_screen(false))
    }

    fn run(mut repl: TestRepl) -> (GameSession<InMemoryWordStore, ScriptedRandom>, String) {
        repl.run().unwrap();
        let (session, output) = repl.into_parts();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_full_round_then_quit() {
        // 3 players: 6 Enters, then quit
        let rng = ScriptedRandom::new(vec![0, 1], vec![false]);
        let (session, output) = run(repl("猫,狗\n苹果,香蕉\n", rng, "3\n\n\n\n\n\n\nq\n"));

        assert!(output.contains("你是第 1 个玩家"));
        assert!(output.contains("你是第 3 个玩家"));
        assert!(output.contains("卧底是第 2 个玩家"));
        assert!(output.contains("多数派词：猫    卧底词：狗"));
        assert!(output.contains("玩家 2: 狗"));
        assert!(session.is_revealed());
        assert_eq!(session.remaining_pairs(), 1);
    }

    #[test]
    fn test_enter_accepts_default_players() {
        let rng = ScriptedRandom::default();
        let (session, output) = run(
            repl("猫,狗\n", rng, "\n")
                .with_default_players(PlayerCount::new(5).unwrap()),
        );
        assert!(output.contains("[5]"));
        assert_eq!(session.player_count(), Some(PlayerCount::new(5).unwrap()));
    }

    #[test]
    fn test_invalid_player_count_reprompts() {
        let rng = ScriptedRandom::default();
        let (session, output) = run(repl("猫,狗\n", rng, "abc\n1\n2\n"));

        assert!(output.contains("请输入正确的数字"));
        assert!(output.contains("玩家人数必须大于等于2"));
        assert_eq!(session.player_count(), Some(PlayerCount::new(2).unwrap()));
    }

    #[test]
    fn test_exhausted_pool_returns_to_menu() {
        let rng = ScriptedRandom::default();
        // one round of 2, then next round (exhausted), then quit
        let (session, output) = run(repl("猫,狗\n", rng, "2\n\n\n\n\nn\nq\n"));

        assert!(output.contains("词库已使用完，请更新 memory:active 或从 memory:used 移回词条。"));
        // the previous round's summary survives
        assert!(session.final_summary().is_ok());
    }

    #[test]
    fn test_reset_player_count_prompts_again() {
        let rng = ScriptedRandom::default();
        // round of 2, reset, round of 4, quit
        let input = format!("2\n{}r\n4\n{}q\n", "\n".repeat(4), "\n".repeat(8));
        let (session, output) = run(repl("猫,狗\n苹果,香蕉\n", rng, &input));

        assert_eq!(output.matches("请输入参与玩家人数").count(), 2);
        assert_eq!(session.player_count(), Some(PlayerCount::new(4).unwrap()));
        assert_eq!(session.remaining_pairs(), 0);
    }

    #[test]
    fn test_initial_players_skip_prompt() {
        let rng = ScriptedRandom::default();
        let (_, output) = run(
            repl("猫,狗\n", rng, "\n\n\n\nq\n")
                .with_initial_players(Some(PlayerCount::new(2).unwrap())),
        );
        assert!(!output.contains("请输入参与玩家人数"));
        assert!(output.contains("结果公布"));
    }

    #[test]
    fn test_json_summary() {
        let rng = ScriptedRandom::new(vec![0, 0], vec![true]);
        let (_, output) = run(
            repl("猫,狗\n", rng, "2\n\n\n\n\nq\n").with_display(
                DisplayConfig::default()
                    .with_clear_screen(false)
                    .with_format(OutputFormat::Json),
            ),
        );
        assert!(output.contains("\"undercover_index\": 0"));
        assert!(output.contains("\"majority\": \"狗\""));
    }

    #[test]
    fn test_end_of_input_mid_round_quits() {
        let rng = ScriptedRandom::default();
        let (session, output) = run(repl("猫,狗\n", rng, "3\n\n"));
        assert!(output.contains("你的词是"));
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_empty_line_at_menu_does_not_deal() {
        let rng = ScriptedRandom::default();
        // extra Enters after the reveal, then quit
        let (session, output) = run(repl("猫,狗\n苹果,香蕉\n", rng, "2\n\n\n\n\n\n\nq\n"));

        assert_eq!(session.remaining_pairs(), 1);
        assert!(session.is_revealed());
        assert_eq!(output.matches("[n] 下一局游戏").count(), 3);
    }

    #[test]
    fn test_unknown_menu_choice() {
        let rng = ScriptedRandom::default();
        let (_, output) = run(repl("猫,狗\n", rng, "2\n\n\n\n\nx\nq\n"));
        assert!(output.contains("未知选项: x"));
    }
}
