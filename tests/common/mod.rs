//! Helpers shared by the integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use kube_game::core::die::{Die, Direction};
use kube_game::core::level::Level;
use kube_game::core::player::Pos;

/// Shortest move list that ends on the finish with the target on top,
/// searching every (position, orientation) pair.
pub fn winning_route(level: &Level) -> Option<Vec<Direction>> {
    type State = (Pos, Die);
    let start: State = (level.player.pos, level.player.die);
    let mut prev: HashMap<State, Option<(State, Direction)>> = HashMap::from([(start, None)]);
    let mut queue = VecDeque::from([start]);
    while let Some(state) = queue.pop_front() {
        let (pos, die) = state;
        if pos == level.finish.pos && die.current_top() == level.finish.target {
            let mut path = Vec::new();
            let mut cur = state;
            while let Some(Some((p, dir))) = prev.get(&cur).copied() {
                path.push(dir);
                cur = p;
            }
            path.reverse();
            return Some(path);
        }
        for dir in Direction::ALL {
            let next = pos.step(dir);
            if !level.is_valid_move(next.x, next.y) {
                continue;
            }
            let ns = (next, die.rolled(dir));
            if !prev.contains_key(&ns) {
                prev.insert(ns, Some((state, dir)));
                queue.push_back(ns);
            }
        }
    }
    None
}
