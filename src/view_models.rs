// src/view_models.rs

use crate::deck::FlashcardDeck;
use crate::model::{Flashcard, Mcq};
use crate::quiz::QuizSession;

/// Cómo se pinta cada opción del test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Neutral,
    Correct,
    WrongSelected,
    Dimmed,
}

#[derive(Clone, Debug)]
pub struct OptionRow {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug)]
pub struct QuestionView {
    pub number: usize, // 1-based
    pub total: usize,
    pub question: String,
    pub options: Vec<OptionRow>,
    pub revealed: bool,
    pub answered_correctly: bool,
    pub explanation: String,
    pub correct_text: Option<String>,
    pub is_last: bool,
}

#[derive(Clone, Debug)]
pub struct CardView {
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub flipped: bool,
}

impl QuestionView {
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.number as f32 / self.total as f32
        }
    }
}

impl CardView {
    pub fn counter(&self) -> String {
        format!("{} / {}", self.number, self.total)
    }
}

pub fn option_state(option: usize, correct: usize, selected: Option<usize>) -> OptionState {
    match selected {
        None => OptionState::Neutral,
        Some(_) if option == correct => OptionState::Correct,
        Some(sel) if sel == option => OptionState::WrongSelected,
        Some(_) => OptionState::Dimmed,
    }
}

pub fn question_view(session: &QuizSession, mcqs: &[Mcq]) -> Option<QuestionView> {
    let mcq = session.current(mcqs)?;
    let selected = session.selected_option();

    let options = mcq
        .options
        .iter()
        .enumerate()
        .map(|(index, text)| OptionRow {
            index,
            letter: (b'A' + (index % 26) as u8) as char,
            text: text.clone(),
            state: option_state(index, mcq.correct_answer_index, selected),
        })
        .collect();

    Some(QuestionView {
        number: session.current_index() + 1,
        total: mcqs.len(),
        question: mcq.question.clone(),
        options,
        revealed: selected.is_some(),
        answered_correctly: selected.is_some_and(|s| mcq.is_correct(s)),
        explanation: mcq.explanation.clone(),
        correct_text: mcq.correct_option().map(str::to_string),
        is_last: session.is_last(mcqs),
    })
}

pub fn card_view(deck: &FlashcardDeck, cards: &[Flashcard]) -> Option<CardView> {
    let card = deck.current(cards)?;
    let flipped = deck.is_flipped();
    Some(CardView {
        number: deck.index() + 1,
        total: cards.len(),
        text: if flipped { card.back.clone() } else { card.front.clone() },
        flipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mcq() -> Mcq {
        Mcq {
            question: "Which organelle makes ATP?".into(),
            options: vec![
                "Nucleus".into(),
                "Mitochondrion".into(),
                "Ribosome".into(),
                "Golgi".into(),
            ],
            correct_answer_index: 1,
            explanation: "Cellular respiration happens there.".into(),
        }
    }

    #[test]
    fn options_are_neutral_until_answered() {
        let mcqs = vec![mcq()];
        let view = question_view(&QuizSession::new(), &mcqs).unwrap();
        assert!(!view.revealed);
        assert!(view.options.iter().all(|o| o.state == OptionState::Neutral));
        assert_eq!(view.options[3].letter, 'D');
        assert_eq!(view.number, 1);
        assert!(view.is_last);
    }

    #[test]
    fn wrong_answer_marks_choice_and_correct_option() {
        let mcqs = vec![mcq()];
        let mut session = QuizSession::new();
        session.select(2, &mcqs);
        let view = question_view(&session, &mcqs).unwrap();

        let states: Vec<_> = view.options.iter().map(|o| o.state).collect();
        assert_eq!(
            states,
            vec![
                OptionState::Dimmed,
                OptionState::Correct,
                OptionState::WrongSelected,
                OptionState::Dimmed,
            ]
        );
        assert!(!view.answered_correctly);
        assert_eq!(view.correct_text.as_deref(), Some("Mitochondrion"));
    }

    #[test]
    fn out_of_range_answer_highlights_nothing_correct() {
        let mut broken = mcq();
        broken.correct_answer_index = 7;
        let mcqs = vec![broken];
        let mut session = QuizSession::new();
        session.select(0, &mcqs);
        let view = question_view(&session, &mcqs).unwrap();

        assert_eq!(view.options[0].state, OptionState::WrongSelected);
        assert!(view.options.iter().all(|o| o.state != OptionState::Correct));
        assert_eq!(view.correct_text, None);
    }

    #[test]
    fn card_shows_back_when_flipped() {
        let cards = vec![
            Flashcard {
                front: "ATP".into(),
                back: "Energy currency".into(),
            },
            Flashcard {
                front: "DNA".into(),
                back: "Genetic material".into(),
            },
        ];
        let mut deck = FlashcardDeck::new();
        deck.next(cards.len());
        deck.flip();

        let view = card_view(&deck, &cards).unwrap();
        assert_eq!(view.text, "Genetic material");
        assert_eq!(view.counter(), "2 / 2");
        assert!(card_view(&deck, &[]).is_none());
    }
}
