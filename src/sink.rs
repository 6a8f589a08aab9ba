use crate::library::Vec3;

/// Color tag for a ray; hosts map it to whatever their canvas uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RayColor {
    Cyan,
    Red,
    Yellow,
    Magenta,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Log(String),
    Ray {
        origin: Vec3,
        direction: Vec3,
        color: RayColor,
    },
}

/// Debug output side channel. Emitting never fails.
pub trait Sink {
    fn emit(&mut self, event: Event);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn emit(&mut self, event: Event) {
        (**self).emit(event)
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder { events: Vec::new() }
    }

    pub fn logs(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Log(line) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn rays(&self) -> Vec<(Vec3, RayColor)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Ray { direction, color, .. } => Some((*direction, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Sink for Recorder {
    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}

/// Forwards every event to the `tracing` subscriber.
#[derive(Debug, Default)]
pub struct TraceSink;

impl Sink for TraceSink {
    fn emit(&mut self, event: Event) {
        match event {
            Event::Log(line) => tracing::info!("{line}"),
            Event::Ray { origin, direction, color } => {
                tracing::trace!(?origin, ?direction, ?color, "ray")
            }
        }
    }
}
