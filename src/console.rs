#![cfg(feature = "std")]

//! Text console front-end.
//!
//! Prompts are in Indonesian, matching the console game this crate grew out
//! of. Input and output are generic so scripted sessions can drive it.

use std::io::{BufRead, Write};

use anyhow::bail;
use log::info;

use crate::core::{GameEngine, GameStatus, Player};

const UNDO_PROMPT: &str = "Apakah Anda ingin membatalkan langkah sebelumnya? (ya/tidak): ";

pub struct Console<R, W> {
    input: R,
    output: W,
    engine: GameEngine,
    name_x: String,
    name_o: String,
}

/// Parse two whitespace-separated integers, ignoring anything after them.
fn parse_move(line: &str) -> Option<(i64, i64)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some((row, col))
}

/// Convert a 1-indexed coordinate as typed by the user to a board index.
fn to_index(value: i64) -> Option<usize> {
    usize::try_from(value.checked_sub(1)?).ok()
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            engine: GameEngine::new(),
            name_x: "X".to_string(),
            name_o: "O".to_string(),
        }
    }

    /// Preset player names; `run` will then skip the name prompts for them.
    pub fn with_names(mut self, name_x: Option<String>, name_o: Option<String>) -> Self {
        if let Some(name) = name_x {
            self.name_x = name;
        }
        if let Some(name) = name_o {
            self.name_o = name;
        }
        self
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn name_of(&self, player: Player) -> &str {
        match player {
            Player::Cross => &self.name_x,
            Player::Nought => &self.name_o,
        }
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }
        Ok(line.trim().to_string())
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Render the board followed by a blank line.
    pub fn paint_board(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{}", self.engine.board())?;
        Ok(())
    }

    /// Ask for both names, then play one game.
    pub fn run(&mut self) -> anyhow::Result<GameStatus> {
        self.ask_names(true, true)?;
        self.play()
    }

    /// Prompt for the names selected by the flags. Blank answers keep the
    /// current name.
    pub fn ask_names(&mut self, ask_x: bool, ask_o: bool) -> anyhow::Result<()> {
        if ask_x {
            let name = self.prompt("Masukkan nama pemain untuk 'X': ")?;
            if !name.is_empty() {
                self.name_x = name;
            }
        }
        if ask_o {
            let name = self.prompt("Masukkan nama pemain untuk 'O': ")?;
            if !name.is_empty() {
                self.name_o = name;
            }
        }
        Ok(())
    }

    /// Play a fresh game to completion and return the final status.
    pub fn play(&mut self) -> anyhow::Result<GameStatus> {
        self.engine.reset();
        while self.engine.status() == GameStatus::Playing {
            self.step()?;
        }
        let status = self.engine.status();
        info!("console game finished: {:?}", status);
        Ok(status)
    }

    /// One turn: offer an undo, then read moves until a legal one is played.
    fn step(&mut self) -> anyhow::Result<()> {
        loop {
            let answer = self.prompt(UNDO_PROMPT)?;
            if answer.eq_ignore_ascii_case("ya") {
                self.engine.undo();
                self.paint_board()?;
            }

            let name = self.name_of(self.engine.current_player()).to_string();
            let line = self.prompt(&format!(
                "Giliran {}, masukkan langkah Anda (baris[1-3] kolom[1-3]): ",
                name
            ))?;
            let Some((row, col)) = parse_move(&line) else {
                writeln!(self.output, "Masukan tidak valid. Coba lagi...")?;
                continue;
            };
            match (to_index(row), to_index(col)) {
                (Some(r), Some(c)) if self.engine.is_legal_move(r, c) => {
                    let status = self.engine.apply_move(r, c)?;
                    self.paint_board()?;
                    self.announce(status)?;
                    return Ok(());
                }
                _ => {
                    writeln!(
                        self.output,
                        "Langkah ini di ({},{}) tidak valid. Coba lagi...",
                        row, col
                    )?;
                }
            }
        }
    }

    fn announce(&mut self, status: GameStatus) -> anyhow::Result<()> {
        match status {
            GameStatus::CrossWon => writeln!(self.output, "{} menang!\nSampai jumpa!", self.name_x)?,
            GameStatus::NoughtWon => writeln!(self.output, "{} menang!\nSampai jumpa!", self.name_o)?,
            GameStatus::Draw => writeln!(self.output, "Permainan Seri!\nSampai jumpa!")?,
            GameStatus::Playing => {}
        }
        Ok(())
    }
}
