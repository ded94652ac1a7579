use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of an interface standard. Registries may carry standards beyond the
/// well-known ones through `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StandardKind {
    Erc20,
    Erc721,
    Erc1155,
    Erc777,
    Erc4626,
    Erc2981,
    Erc165,
    Erc1820,
    Erc1822,
    Ownable,
    Custom(String),
}

impl StandardKind {
    pub fn as_str(&self) -> &str {
        match self {
            StandardKind::Erc20 => "ERC20",
            StandardKind::Erc721 => "ERC721",
            StandardKind::Erc1155 => "ERC1155",
            StandardKind::Erc777 => "ERC777",
            StandardKind::Erc4626 => "ERC4626",
            StandardKind::Erc2981 => "ERC2981",
            StandardKind::Erc165 => "ERC165",
            StandardKind::Erc1820 => "ERC1820",
            StandardKind::Erc1822 => "ERC1822",
            StandardKind::Ownable => "OWNABLE",
            StandardKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for StandardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for StandardKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ERC20" => StandardKind::Erc20,
            "ERC721" => StandardKind::Erc721,
            "ERC1155" => StandardKind::Erc1155,
            "ERC777" => StandardKind::Erc777,
            "ERC4626" => StandardKind::Erc4626,
            "ERC2981" => StandardKind::Erc2981,
            "ERC165" => StandardKind::Erc165,
            "ERC1820" => StandardKind::Erc1820,
            "ERC1822" => StandardKind::Erc1822,
            "OWNABLE" => StandardKind::Ownable,
            _ => StandardKind::Custom(value),
        }
    }
}

impl From<StandardKind> for String {
    fn from(value: StandardKind) -> Self {
        value.as_str().to_string()
    }
}

/// A function shape: name plus ordered input and output type strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub name: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl FunctionSignature {
    pub fn new(name: &str, inputs: &[&str], outputs: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            outputs: outputs.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn token_count(&self) -> usize {
        1 + self.inputs.len() + self.outputs.len()
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.inputs.join(","))?;
        if !self.outputs.is_empty() {
            write!(f, " returns ({})", self.outputs.join(","))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventInput {
    pub type_name: String,
    pub indexed: bool,
}

/// An event shape: name plus ordered inputs with their indexed flags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventSignature {
    pub name: String,
    pub inputs: Vec<EventInput>,
}

impl EventSignature {
    pub fn new(name: &str, inputs: &[(&str, bool)]) -> Self {
        Self {
            name: name.to_string(),
            inputs: inputs
                .iter()
                .map(|(type_name, indexed)| EventInput {
                    type_name: type_name.to_string(),
                    indexed: *indexed,
                })
                .collect(),
        }
    }

    pub fn token_count(&self) -> usize {
        1 + self.inputs.len()
    }
}

impl fmt::Display for EventSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inputs: Vec<String> = self
            .inputs
            .iter()
            .map(|input| {
                if input.indexed {
                    format!("{} indexed", input.type_name)
                } else {
                    input.type_name.clone()
                }
            })
            .collect();
        write!(f, "{}({})", self.name, inputs.join(","))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardDescriptor {
    pub kind: StandardKind,
    pub name: String,
    pub url: String,
    pub functions: Vec<FunctionSignature>,
    pub events: Vec<EventSignature>,
}

impl StandardDescriptor {
    pub fn new(kind: StandardKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            url: String::new(),
            functions: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub fn function(mut self, name: &str, inputs: &[&str], outputs: &[&str]) -> Self {
        self.functions
            .push(FunctionSignature::new(name, inputs, outputs));
        self
    }

    pub fn event(mut self, name: &str, inputs: &[(&str, bool)]) -> Self {
        self.events.push(EventSignature::new(name, inputs));
        self
    }

    pub fn token_count(&self) -> usize {
        self.functions
            .iter()
            .map(FunctionSignature::token_count)
            .sum::<usize>()
            + self
                .events
                .iter()
                .map(EventSignature::token_count)
                .sum::<usize>()
    }
}
