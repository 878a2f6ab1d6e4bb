//! Local fake-data source.
//!
//! Produces plausible people, companies, cities and industries from fixed
//! word lists. The generator only sees the [`FakeData`] trait, so tests can
//! swap in deterministic sources.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub trait FakeData: Send {
    /// Full person name, e.g. "Ada Lovelace".
    fn name(&mut self) -> String;
    fn email(&mut self) -> String;
    /// Company base name without a legal suffix.
    fn company(&mut self) -> String;
    fn company_suffix(&mut self) -> String;
    fn city(&mut self) -> String;
    fn industry(&mut self) -> String;
}

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy", "Matthew", "Betty", "Anthony",
    "Sandra", "Mark", "Margaret", "Donald", "Ashley", "Steven", "Kimberly", "Andrew", "Emily",
    "Paul", "Donna", "Joshua", "Michelle", "Kenneth", "Carol", "Kevin", "Amanda", "Brian",
    "Melissa", "George", "Deborah", "Timothy", "Stephanie", "Ronald", "Rebecca", "Jason", "Laura",
    "Edward", "Sharon", "Jeffrey", "Cynthia", "Ryan", "Kathleen", "Jacob", "Amy", "Gary",
    "Angela", "Nicholas", "Shirley", "Eric", "Anna", "Jonathan", "Brenda",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans",
    "Turner", "Diaz", "Parker", "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris",
    "Morales", "Murphy", "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper", "Peterson",
    "Bailey", "Reed", "Kelly", "Howard", "Ramos", "Kim", "Cox", "Ward", "Richardson",
];

const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "example.org", "example.net", "mail.example.com", "corp.example.org",
    "inbox.example.net",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Ltd", "Group", "PLC", "and Sons", "Co"];

const CITIES: &[&str] = &[
    "Port Jessica", "North Michael", "East Sarah", "Lake Thomas", "South Kevin", "West Laura",
    "New Amanda", "Port Brian", "Lake Emily", "North Angela", "Springfield", "Riverside",
    "Fairview", "Georgetown", "Franklin", "Greenville", "Bristol", "Clinton", "Salem",
    "Madison", "Oakland", "Ashland", "Burlington", "Manchester", "Milton", "Newport",
    "Dayton", "Lexington", "Milford", "Winchester", "Hudson", "Arlington", "Kingston",
    "Dover", "Marion", "Oxford", "Jackson", "Auburn", "Clayton", "Centerville",
];

const BS_VERBS: &[&str] = &[
    "implement", "utilize", "integrate", "streamline", "optimize", "evolve", "transform",
    "embrace", "enable", "orchestrate", "leverage", "reinvent", "aggregate", "architect",
    "enhance", "incentivize", "morph", "empower", "envisioneer", "monetize", "harness",
    "facilitate", "seize", "disintermediate", "synergize", "strategize", "deploy", "brand",
    "grow", "target", "syndicate", "synthesize", "deliver", "mesh", "incubate", "engage",
    "maximize", "benchmark", "expedite", "reintermediate", "whiteboard", "visualize",
    "repurpose", "innovate", "scale", "unleash", "drive", "extend", "engineer",
    "revolutionize", "generate", "exploit", "transition", "e-enable", "iterate", "cultivate",
    "matrix", "productize", "redefine", "recontextualize",
];

const BS_ADJECTIVES: &[&str] = &[
    "clicks-and-mortar", "value-added", "vertical", "proactive", "robust", "revolutionary",
    "scalable", "leading-edge", "innovative", "intuitive", "strategic", "e-business",
    "mission-critical", "sticky", "one-to-one", "24/7", "end-to-end", "global", "B2B", "B2C",
    "granular", "frictionless", "virtual", "viral", "dynamic", "best-of-breed", "killer",
    "magnetic", "bleeding-edge", "web-enabled", "interactive", "dot-com", "sexy", "back-end",
    "real-time", "efficient", "front-end", "distributed", "seamless", "extensible", "turn-key",
    "world-class", "open-source", "cross-platform", "cross-media", "synergistic", "bricks-and-clicks",
    "out-of-the-box", "enterprise", "integrated", "impactful", "wireless", "transparent",
    "next-generation", "cutting-edge", "user-centric", "visionary", "customized", "ubiquitous",
    "plug-and-play", "collaborative", "compelling", "holistic", "rich",
];

const BS_NOUNS: &[&str] = &[
    "synergies", "paradigms", "markets", "partnerships", "infrastructures", "platforms",
    "initiatives", "channels", "eyeballs", "communities", "ROI", "solutions", "action-items",
    "portals", "niches", "technologies", "content", "supply-chains", "convergence",
    "relationships", "architectures", "interfaces", "e-markets", "e-commerce", "systems",
    "bandwidth", "models", "mindshare", "deliverables", "users", "schemas", "networks",
    "applications", "metrics", "e-business", "functionalities", "experiences", "web services",
    "methodologies", "blockchains", "lifetime value",
];

/// Word-list backed [`FakeData`] source.
pub struct LocalFaker<R: Rng + Send = StdRng> {
    rng: R,
}

impl LocalFaker<StdRng> {
    /// Reproducible faker: the same seed yields the same sequence of values.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng + Send> LocalFaker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, words: &'static [&'static str]) -> &'static str {
        // Word lists are non-empty constants.
        words.choose(&mut self.rng).copied().unwrap_or_default()
    }

    /// Buzzword phrase such as "streamline scalable platforms".
    pub fn bs(&mut self) -> String {
        let verb = self.pick(BS_VERBS);
        let adjective = self.pick(BS_ADJECTIVES);
        let noun = self.pick(BS_NOUNS);
        format!("{verb} {adjective} {noun}")
    }
}

impl<R: Rng + Send> FakeData for LocalFaker<R> {
    fn name(&mut self) -> String {
        let first = self.pick(FIRST_NAMES);
        let last = self.pick(LAST_NAMES);
        format!("{first} {last}")
    }

    fn email(&mut self) -> String {
        let first = self.pick(FIRST_NAMES).to_lowercase();
        let last = self.pick(LAST_NAMES).to_lowercase();
        let domain = self.pick(EMAIL_DOMAINS);
        if self.rng.gen_bool(0.5) {
            let n: u16 = self.rng.gen_range(1..1000);
            format!("{first}.{last}{n}@{domain}")
        } else {
            format!("{first}.{last}@{domain}")
        }
    }

    fn company(&mut self) -> String {
        match self.rng.gen_range(0..3) {
            0 => self.pick(LAST_NAMES).to_string(),
            1 => {
                let a = self.pick(LAST_NAMES);
                let b = self.pick(LAST_NAMES);
                format!("{a}-{b}")
            }
            _ => {
                let a = self.pick(LAST_NAMES);
                let b = self.pick(LAST_NAMES);
                let c = self.pick(LAST_NAMES);
                format!("{a}, {b} and {c}")
            }
        }
    }

    fn company_suffix(&mut self) -> String {
        self.pick(COMPANY_SUFFIXES).to_string()
    }

    fn city(&mut self) -> String {
        self.pick(CITIES).to_string()
    }

    /// Last word of a buzzword phrase, capitalized ("Synergies", "Platforms").
    fn industry(&mut self) -> String {
        let phrase = self.bs();
        let last = phrase.rsplit(' ').next().unwrap_or_default();
        capitalize(last)
    }
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
