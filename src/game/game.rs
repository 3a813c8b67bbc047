use super::phase::Phase;
use super::showdown;
use super::showdown::VACANT;
use super::showdown::Verdict;
use super::team::Team;
use crate::ELEVEN;
use crate::GAME;
use crate::HAND;
use crate::N;
use crate::Position;
use crate::TRICKS;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use rand::Rng;

/// Full observable state of one Truco 2v2 game: four hands, the trick
/// in progress, the turned trump indicator, scores, and the rotation
/// pointers. It is a plain value: copies are cheap and every
/// speculative branch (tree expansion, rollout, worker, lane) works on
/// its own copy, never on a shared reference.
///
/// Mutators uphold the rules; misuse (playing out of turn, playing a
/// card not in hand) is a corrupted simulation and fails fast.
#[derive(Debug, Clone, Copy)]
pub struct Game {
    hands: [Hand; N],
    table: [Option<Card>; N],
    gone: Hand,
    vira: Option<Card>,
    tricks: [Option<Team>; TRICKS],
    trick: usize,
    phase: Phase,
    score: [u8; 2],
    value: u8,
    dealt: usize,
    starter: Position,
    leader: Position,
    ticker: Position,
    verdict: Verdict,
}

impl Game {
    pub fn new() -> Self {
        Self {
            hands: [Hand::empty(); N],
            table: [None; N],
            gone: Hand::empty(),
            vira: None,
            tricks: [None; TRICKS],
            trick: 0,
            phase: Phase::NewHand,
            score: [0; 2],
            value: 1,
            dealt: 0,
            starter: N - 1,
            leader: 0,
            ticker: 0,
            verdict: Verdict::Open,
        }
    }

    //
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn hand(&self, seat: Position) -> Hand {
        self.hands[seat]
    }
    pub fn table(&self) -> &[Option<Card>; N] {
        &self.table
    }
    pub fn gone(&self) -> Hand {
        self.gone
    }
    pub fn vira(&self) -> Option<Card> {
        self.vira
    }
    pub fn trump(&self) -> Rank {
        self.vira.expect("trump indicator revealed").rank().next()
    }
    pub fn score(&self, team: Team) -> u8 {
        self.score[team.index()]
    }
    pub fn value(&self) -> u8 {
        self.value
    }
    pub fn dealt(&self) -> usize {
        self.dealt
    }
    pub fn ticker(&self) -> Position {
        self.ticker
    }
    pub fn leader(&self) -> Position {
        self.leader
    }
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
    /// winner of the last settled hand, None while open or drawn
    pub fn winner(&self) -> Option<Team> {
        match self.verdict {
            Verdict::Won(team) => Some(team),
            _ => None,
        }
    }
    /// tricks resolved so far this hand
    pub fn tricks(&self) -> &[Option<Team>] {
        &self.tricks[..self.trick]
    }
    /// the team whose twelfth point ended the game
    pub fn champion(&self) -> Option<Team> {
        [Team::One, Team::Two]
            .into_iter()
            .find(|team| self.score(*team) >= GAME)
    }
    /// the team at eleven points while an eleven-hand is armed
    pub fn at_risk(&self) -> Option<Team> {
        [Team::One, Team::Two]
            .into_iter()
            .find(|team| self.score(*team) >= ELEVEN)
            .filter(|_| self.value == 3)
    }

    /// ordered legal actions of the seat to move
    pub fn legal(&self) -> Vec<Card> {
        match self.phase {
            Phase::InProgress => Vec::from(self.hands[self.ticker]),
            _ => vec![],
        }
    }

    /// open the next hand: rotate into ElevenHand when exactly one team
    /// sits at eleven points, deal straight away otherwise
    pub fn begin(&mut self, rng: &mut impl Rng) {
        assert!(
            matches!(self.phase, Phase::NewHand | Phase::HandFinished),
            "cannot begin a hand from {:?}",
            self.phase
        );
        self.dealt += 1;
        self.reset();
        let one = self.score(Team::One) >= ELEVEN;
        let two = self.score(Team::Two) >= ELEVEN;
        if one ^ two {
            self.phase = Phase::ElevenHand;
            self.value = 3;
        } else {
            self.deal(rng);
        }
    }

    /// shuffle, deal three cards per seat, turn the trump indicator,
    /// and rotate the starting seat
    pub fn deal(&mut self, rng: &mut impl Rng) {
        assert!(self.vira.is_none(), "hand already dealt");
        let mut deck = Deck::new();
        for seat in 0..N {
            self.hands[seat] = deck.deal(HAND, rng);
        }
        self.vira = Some(deck.draw(rng));
        self.starter = (self.starter + 1) % N;
        self.leader = self.starter;
        self.ticker = self.starter;
        self.phase = Phase::InProgress;
    }

    /// `team` runs from an armed eleven-hand: one point to the others
    pub fn concede(&mut self, team: Team) {
        assert!(self.value == 3, "no eleven-hand armed");
        self.award(team.other(), 1);
        if self.phase != Phase::GameFinished {
            self.phase = Phase::HandFinished;
        }
    }

    /// play a card for a seat. resolves the trick automatically once
    /// all four table slots are filled.
    pub fn apply(&mut self, seat: Position, card: Card) {
        assert!(self.phase == Phase::InProgress, "hand not in progress");
        assert!(seat == self.ticker, "not seat {}'s turn", seat);
        assert!(self.hands[seat].contains(card), "card not in hand");
        self.hands[seat].remove(card);
        self.table[seat] = Some(card);
        self.ticker = (self.ticker + 1) % N;
        if self.table.iter().all(|slot| slot.is_some()) {
            self.resolve();
        }
    }

    /// force a hand-outcome check. used when the seat to move is out of
    /// cards; a hand that cannot settle here means the calling sequence
    /// is corrupted, which is fatal.
    pub fn showdown(&mut self) {
        assert!(self.phase == Phase::InProgress, "showdown outside play");
        match showdown::settle(self.tricks()) {
            Verdict::Open => panic!("hand open after {} tricks", self.trick),
            verdict => self.finish(verdict),
        }
    }

    /// credit points; the game ends at twelve
    pub fn award(&mut self, team: Team, points: u8) {
        self.score[team.index()] += points;
        if self.score[team.index()] >= GAME {
            self.phase = Phase::GameFinished;
        }
    }

    fn resolve(&mut self) {
        let mut plays = [VACANT; N];
        for seat in 0..N {
            plays[seat] = self.table[seat].map(i8::from).unwrap_or(VACANT);
        }
        match showdown::trick(plays, self.trump()) {
            Some(seat) => {
                self.tricks[self.trick] = Some(Team::of(seat));
                self.leader = seat;
                self.ticker = seat;
            }
            None => {
                // tied trick: nobody scores, the same leader leads again
                self.tricks[self.trick] = None;
                self.ticker = self.leader;
            }
        }
        for card in self.table.iter().flatten() {
            self.gone.insert(*card);
        }
        self.table = [None; N];
        self.trick += 1;
        match showdown::settle(self.tricks()) {
            Verdict::Open => (),
            verdict => self.finish(verdict),
        }
    }

    fn finish(&mut self, verdict: Verdict) {
        self.verdict = verdict;
        if let Verdict::Won(team) = verdict {
            self.award(team, self.value);
        }
        if self.phase != Phase::GameFinished {
            self.phase = Phase::HandFinished;
        }
    }

    fn reset(&mut self) {
        self.hands = [Hand::empty(); N];
        self.table = [None; N];
        self.gone = Hand::empty();
        self.vira = None;
        self.tricks = [None; TRICKS];
        self.trick = 0;
        self.value = 1;
        self.verdict = Verdict::Open;
    }

    /// replace a seat's hidden cards with a resampled hand of the same
    /// size. the determinizer's only write access into the state.
    pub fn redeal(&mut self, seat: Position, hand: Hand) {
        assert!(hand.size() == self.hands[seat].size(), "hand size drift");
        self.hands[seat] = hand;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Game {
    /// fixed mid-hand position for tests: no shuffling, no history
    pub fn rig(hands: [Hand; N], vira: Card, starter: Position) -> Self {
        let mut game = Self::new();
        game.hands = hands;
        game.vira = Some(vira);
        game.starter = starter;
        game.leader = starter;
        game.ticker = starter;
        game.phase = Phase::InProgress;
        game
    }
}
