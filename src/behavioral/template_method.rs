// Template Method: the shape of the day is fixed, the meal and the work vary.

pub trait DailyRoutine {
    fn eat(&self) -> &'static str;
    fn work(&self) -> &'static str;

    fn perform(&self) -> Vec<String> {
        vec![
            wake_up().to_string(),
            self.eat().to_string(),
            self.work().to_string(),
            sleep().to_string(),
        ]
    }
}

fn wake_up() -> &'static str {
    "Wake up at 7 AM"
}

fn sleep() -> &'static str {
    "Go to sleep at 10 PM"
}

pub struct StudentRoutine;
impl DailyRoutine for StudentRoutine {
    fn eat(&self) -> &'static str {
        "Eat breakfast quickly"
    }

    fn work(&self) -> &'static str {
        "Attend classes and study"
    }
}

pub struct WorkerRoutine;
impl DailyRoutine for WorkerRoutine {
    fn eat(&self) -> &'static str {
        "Have a proper breakfast"
    }

    fn work(&self) -> &'static str {
        "Go to office and work"
    }
}

pub fn demo() -> Vec<String> {
    let mut lines = vec!["Student's day:".to_string()];
    lines.extend(StudentRoutine.perform());
    lines.push(String::new());
    lines.push("Worker's day:".to_string());
    lines.extend(WorkerRoutine.perform());
    lines
}
