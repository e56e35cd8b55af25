// Adapter: plug an American charger into a European socket.

// Target interface the caller expects
pub trait EuropeanSocket {
    fn plug_in(&self) -> Vec<String>;
}

// Existing device with an incompatible interface
pub struct AmericanCharger;
impl AmericanCharger {
    pub fn charge_with_american_plug(&self) -> String {
        "Charging with American plug".to_string()
    }
}

pub struct SocketAdapter {
    charger: AmericanCharger,
}

impl SocketAdapter {
    pub fn new(charger: AmericanCharger) -> Self {
        Self { charger }
    }
}

impl EuropeanSocket for SocketAdapter {
    fn plug_in(&self) -> Vec<String> {
        vec![
            "Using adapter...".to_string(),
            self.charger.charge_with_american_plug(),
        ]
    }
}

fn charge(socket: &dyn EuropeanSocket) -> Vec<String> {
    socket.plug_in()
}

pub fn demo() -> Vec<String> {
    let adapter = SocketAdapter::new(AmericanCharger);
    charge(&adapter)
}
