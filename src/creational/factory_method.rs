// Factory Method: each creator decides which game it makes.

pub trait Game {
    fn play(&self) -> String;
}

pub struct Football;
impl Game for Football {
    fn play(&self) -> String {
        "Playing football with 22 players".to_string()
    }
}

pub struct Basketball;
impl Game for Basketball {
    fn play(&self) -> String {
        "Playing basketball with 10 players".to_string()
    }
}

pub trait GameCreator {
    type Game: Game;

    fn create_game(&self) -> Self::Game;

    fn start_game(&self) -> String {
        self.create_game().play()
    }
}

pub struct FootballCreator;
impl GameCreator for FootballCreator {
    type Game = Football;

    fn create_game(&self) -> Football {
        Football
    }
}

pub struct BasketballCreator;
impl GameCreator for BasketballCreator {
    type Game = Basketball;

    fn create_game(&self) -> Basketball {
        Basketball
    }
}

pub fn demo() -> Vec<String> {
    vec![FootballCreator.start_game(), BasketballCreator.start_game()]
}
