//! Host signal dispatch and plugin registration

use crate::application::hooks::JsEmbed;
use crate::domain::Metadata;
use crate::error::Result;
use crate::infrastructure::Generator;
use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

/// Build lifecycle points a plugin can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Metadata of an article was read
    ArticleGeneratorContext,
    /// Metadata of a page was read
    PageGeneratorContext,
    /// All articles were discovered
    ArticleGeneratorFinalized,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Signal::ArticleGeneratorContext => "article_generator_context",
            Signal::PageGeneratorContext => "page_generator_context",
            Signal::ArticleGeneratorFinalized => "article_generator_finalized",
        };
        f.write_str(name)
    }
}

type ContextReceiver = Box<dyn Fn(&dyn Generator, &mut Metadata) -> Result<()>>;
type FinalizedReceiver = Box<dyn Fn(&dyn Generator) -> Result<()>>;

/// Receivers connected to host signals, owned by the host
#[derive(Default)]
pub struct SignalBus {
    context: Vec<(Signal, ContextReceiver)>,
    finalized: Vec<(Signal, FinalizedReceiver)>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect a receiver taking (generator, metadata)
    pub fn connect_context<F>(&mut self, signal: Signal, receiver: F)
    where
        F: Fn(&dyn Generator, &mut Metadata) -> Result<()> + 'static,
    {
        self.context.push((signal, Box::new(receiver)));
    }

    /// Connect a receiver taking (generator)
    pub fn connect_finalized<F>(&mut self, signal: Signal, receiver: F)
    where
        F: Fn(&dyn Generator) -> Result<()> + 'static,
    {
        self.finalized.push((signal, Box::new(receiver)));
    }

    /// Run context receivers for `signal` in connection order, stopping at the first error
    pub fn send_context(
        &self,
        signal: Signal,
        gen: &dyn Generator,
        metadata: &mut Metadata,
    ) -> Result<()> {
        for (_, receiver) in self.context.iter().filter(|(s, _)| *s == signal) {
            receiver(gen, metadata)?;
        }
        Ok(())
    }

    /// Run finalization receivers for `signal` in connection order, stopping at the first error
    pub fn send_finalized(&self, signal: Signal, gen: &dyn Generator) -> Result<()> {
        for (_, receiver) in self.finalized.iter().filter(|(s, _)| *s == signal) {
            receiver(gen)?;
        }
        Ok(())
    }

    /// Number of receivers connected to `signal`
    pub fn receiver_count(&self, signal: Signal) -> usize {
        let context = self.context.iter().filter(|(s, _)| *s == signal).count();
        let finalized = self.finalized.iter().filter(|(s, _)| *s == signal).count();
        context + finalized
    }
}

impl fmt::Debug for SignalBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalBus")
            .field("context", &self.context.iter().map(|(s, _)| s).collect::<Vec<_>>())
            .field("finalized", &self.finalized.iter().map(|(s, _)| s).collect::<Vec<_>>())
            .finish()
    }
}

/// Handle describing what a registration connected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    signals: Vec<Signal>,
    copied: Rc<RefCell<Vec<PathBuf>>>,
}

impl Registration {
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn is_connected(&self, signal: Signal) -> bool {
        self.signals.contains(&signal)
    }

    /// Files copied by `move_resources` so far, relative to the content root
    pub fn copied(&self) -> Vec<PathBuf> {
        self.copied.borrow().clone()
    }
}

/// Connect the plugin hooks with default settings
pub fn register(bus: &mut SignalBus) -> Registration {
    register_with(bus, JsEmbed::default())
}

/// Connect `add_tags` to article and page metadata and `move_resources` to
/// article finalization
pub fn register_with(bus: &mut SignalBus, plugin: JsEmbed) -> Registration {
    let article = plugin.clone();
    bus.connect_context(Signal::ArticleGeneratorContext, move |gen, metadata| {
        article.add_tags(gen, metadata)
    });
    let page = plugin.clone();
    bus.connect_context(Signal::PageGeneratorContext, move |gen, metadata| {
        page.add_tags(gen, metadata)
    });
    let copied = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&copied);
    bus.connect_finalized(Signal::ArticleGeneratorFinalized, move |gen| {
        let files = plugin.move_resources(gen)?;
        log.borrow_mut().extend(files);
        Ok(())
    });

    Registration {
        signals: vec![
            Signal::ArticleGeneratorContext,
            Signal::PageGeneratorContext,
            Signal::ArticleGeneratorFinalized,
        ],
        copied,
    }
}
