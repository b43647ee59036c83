/// Options parsed from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Configuration {
    pub verbose: bool,
}
