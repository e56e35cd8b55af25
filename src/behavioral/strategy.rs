// Strategy: the traveler's means of transport can be swapped at runtime.

pub trait TransportStrategy {
    fn travel(&self, destination: &str) -> String;
}

pub struct CarStrategy;
impl TransportStrategy for CarStrategy {
    fn travel(&self, destination: &str) -> String {
        format!("Driving to {} by car", destination)
    }
}

pub struct TrainStrategy;
impl TransportStrategy for TrainStrategy {
    fn travel(&self, destination: &str) -> String {
        format!("Taking train to {}", destination)
    }
}

pub struct BusStrategy;
impl TransportStrategy for BusStrategy {
    fn travel(&self, destination: &str) -> String {
        format!("Taking bus to {}", destination)
    }
}

pub struct Traveler {
    strategy: Box<dyn TransportStrategy>,
}

impl Traveler {
    pub fn new(strategy: Box<dyn TransportStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn TransportStrategy>) {
        self.strategy = strategy;
    }

    pub fn go_to(&self, destination: &str) -> String {
        self.strategy.travel(destination)
    }
}

pub fn demo() -> Vec<String> {
    let mut traveler = Traveler::new(Box::new(CarStrategy));
    let first = traveler.go_to("Cluj");

    traveler.set_strategy(Box::new(TrainStrategy));
    let second = traveler.go_to("Brasov");

    vec![first, second]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_strategy() {
        assert_eq!(CarStrategy.travel("Iasi"), "Driving to Iasi by car");
        assert_eq!(TrainStrategy.travel("Iasi"), "Taking train to Iasi");
        assert_eq!(BusStrategy.travel("Iasi"), "Taking bus to Iasi");
    }

    #[test]
    fn test_strategy_switch() {
        let mut traveler = Traveler::new(Box::new(TrainStrategy));
        assert_eq!(traveler.go_to("Sibiu"), "Taking train to Sibiu");

        traveler.set_strategy(Box::new(BusStrategy));
        assert_eq!(traveler.go_to("Sibiu"), "Taking bus to Sibiu");
    }

    #[test]
    fn test_demo_lines() {
        assert_eq!(demo(), vec!["Driving to Cluj by car", "Taking train to Brasov"]);
    }
}
