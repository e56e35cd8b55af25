// Decorator: toppings wrap a pizza and add to its description and price.

pub trait Pizza {
    fn description(&self) -> String;
    fn price(&self) -> f64;
}

impl Pizza for Box<dyn Pizza> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn price(&self) -> f64 {
        (**self).price()
    }
}

pub struct BasicPizza;

impl Pizza for BasicPizza {
    fn description(&self) -> String {
        "Basic pizza".to_string()
    }

    fn price(&self) -> f64 {
        10.0
    }
}

pub struct Cheese<P>(pub P);

impl<P: Pizza> Pizza for Cheese<P> {
    fn description(&self) -> String {
        format!("{} + cheese", self.0.description())
    }

    fn price(&self) -> f64 {
        self.0.price() + 2.0
    }
}

pub struct Pepperoni<P>(pub P);

impl<P: Pizza> Pizza for Pepperoni<P> {
    fn description(&self) -> String {
        format!("{} + pepperoni", self.0.description())
    }

    fn price(&self) -> f64 {
        self.0.price() + 3.0
    }
}

/// Whole prices keep one decimal place (`15.0`), others print as-is (`12.5`).
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.1}", price)
    } else {
        format!("{}", price)
    }
}

pub fn receipt(pizza: &dyn Pizza) -> String {
    format!("{} - ${}", pizza.description(), format_price(pizza.price()))
}

pub fn demo() -> Vec<String> {
    let mut pizza: Box<dyn Pizza> = Box::new(BasicPizza);
    pizza = Box::new(Cheese(pizza));
    pizza = Box::new(Pepperoni(pizza));
    vec![receipt(&*pizza)]
}
