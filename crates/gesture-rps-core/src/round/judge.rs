//! Round judging.

use crate::types::{Choice, Verdict};

/// Judge a completed round from the locked pair.
///
/// Only ever evaluated with the choices frozen at round start; a hand
/// that wavers during the countdown has no path back into this
/// decision.
pub fn judge(player: Choice, bot: Choice) -> Verdict {
    if player == bot {
        Verdict::Draw
    } else if player.beats(&bot) {
        Verdict::PlayerWins
    } else {
        Verdict::BotWins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rock_beats_scissors() {
        assert_eq!(judge(Choice::Rock, Choice::Scissors), Verdict::PlayerWins);
        assert_eq!(judge(Choice::Scissors, Choice::Rock), Verdict::BotWins);
    }

    #[test]
    fn test_scissors_beats_paper() {
        assert_eq!(judge(Choice::Scissors, Choice::Paper), Verdict::PlayerWins);
        assert_eq!(judge(Choice::Paper, Choice::Scissors), Verdict::BotWins);
    }

    #[test]
    fn test_paper_beats_rock() {
        assert_eq!(judge(Choice::Paper, Choice::Rock), Verdict::PlayerWins);
        assert_eq!(judge(Choice::Rock, Choice::Paper), Verdict::BotWins);
    }

    #[test]
    fn test_same_choice_draws() {
        for choice in Choice::ALL {
            assert_eq!(judge(choice, choice), Verdict::Draw);
        }
    }

    #[test]
    fn test_all_outcomes() {
        // All 9 ordered pairs
        let mut player_wins = 0;
        let mut bot_wins = 0;
        let mut draws = 0;

        for player in Choice::ALL {
            for bot in Choice::ALL {
                match judge(player, bot) {
                    Verdict::PlayerWins => player_wins += 1,
                    Verdict::BotWins => bot_wins += 1,
                    Verdict::Draw => draws += 1,
                }
            }
        }

        assert_eq!(player_wins, 3);
        assert_eq!(bot_wins, 3);
        assert_eq!(draws, 3);
    }
}
