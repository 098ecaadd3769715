//! Static schema of the HSE-IT questionnaire: 35 questions in 7 dimensions.
//!
//! Everything here is process-wide constant data. Question text is kept in the
//! language the questionnaire is administered in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type QuestionId = u8;

/// Number of questions in a complete submission.
pub const QUESTION_COUNT: usize = 35;

/// Highest score a single answer can produce.
pub const MAX_SCORE_PER_QUESTION: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "demandas")]
    Demands,
    #[serde(rename = "controle")]
    Control,
    #[serde(rename = "apoio_chefia")]
    ManagerSupport,
    #[serde(rename = "apoio_colega")]
    PeerSupport,
    #[serde(rename = "relacionamentos")]
    Relationships,
    #[serde(rename = "cargo_papel")]
    Role,
    #[serde(rename = "comunicacao_mudancas")]
    Change,
}

impl Dimension {
    /// Canonical display order used by charts and dashboards.
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Demands,
            Self::Control,
            Self::ManagerSupport,
            Self::PeerSupport,
            Self::Relationships,
            Self::Role,
            Self::Change,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Demands => "demandas",
            Self::Control => "controle",
            Self::ManagerSupport => "apoio_chefia",
            Self::PeerSupport => "apoio_colega",
            Self::Relationships => "relacionamentos",
            Self::Role => "cargo_papel",
            Self::Change => "comunicacao_mudancas",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Demands => "Demandas",
            Self::Control => "Controle",
            Self::ManagerSupport => "Apoio da chefia",
            Self::PeerSupport => "Apoio dos colegas",
            Self::Relationships => "Relacionamentos",
            Self::Role => "Cargo / Papel",
            Self::Change => "Comunicação e mudanças organizacionais",
        }
    }

    /// Compact label for radar axes where the full label overlaps.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Demands => "Demandas",
            Self::Control => "Controle",
            Self::ManagerSupport => "Apoio chefia",
            Self::PeerSupport => "Apoio colegas",
            Self::Relationships => "Relacionamentos",
            Self::Role => "Cargo / Papel",
            Self::Change => "Comunicação",
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Demands | Self::Relationships => Polarity::Inverted,
            Self::Control
            | Self::ManagerSupport
            | Self::PeerSupport
            | Self::Role
            | Self::Change => Polarity::Standard,
        }
    }

    pub const fn is_inverted(self) -> bool {
        matches!(self.polarity(), Polarity::Inverted)
    }

    /// Number of catalog questions belonging to the dimension.
    pub const fn cardinality(self) -> usize {
        match self {
            Self::Demands => 8,
            Self::Control => 6,
            Self::ManagerSupport => 5,
            Self::PeerSupport => 4,
            Self::Relationships => 4,
            Self::Role => 5,
            Self::Change => 3,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Dimension {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|dimension| dimension.id() == trimmed)
            .ok_or_else(|| CatalogError::UnknownDimension(trimmed.to_string()))
    }
}

/// Whether a higher answer frequency is favorable (standard) or unfavorable (inverted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Standard,
    Inverted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnswerOption {
    #[serde(rename = "nunca")]
    Never,
    #[serde(rename = "raramente")]
    Rarely,
    #[serde(rename = "as_vezes")]
    Sometimes,
    #[serde(rename = "frequentemente")]
    Often,
    #[serde(rename = "sempre")]
    Always,
}

impl AnswerOption {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Never,
            Self::Rarely,
            Self::Sometimes,
            Self::Often,
            Self::Always,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Never => "nunca",
            Self::Rarely => "raramente",
            Self::Sometimes => "as_vezes",
            Self::Often => "frequentemente",
            Self::Always => "sempre",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Never => "Nunca",
            Self::Rarely => "Raramente",
            Self::Sometimes => "Às vezes",
            Self::Often => "Frequentemente",
            Self::Always => "Sempre",
        }
    }
}

impl fmt::Display for AnswerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AnswerOption {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|option| option.key() == trimmed)
            .ok_or_else(|| CatalogError::UnknownOption(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid enumeration value: unknown dimension '{0}'")]
    UnknownDimension(String),
    #[error("invalid enumeration value: unknown answer option '{0}'")]
    UnknownOption(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub dimension: Dimension,
    pub dimension_label: &'static str,
    pub text: &'static str,
}

const fn q(id: QuestionId, dimension: Dimension, text: &'static str) -> Question {
    Question {
        id,
        dimension,
        dimension_label: dimension.label(),
        text,
    }
}

use Dimension::{Change, Control, Demands, ManagerSupport, PeerSupport, Relationships, Role};

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    q(1, Demands, "As exigências de trabalho feitas por colegas e supervisores são difíceis de conciliar"),
    q(2, Demands, "Tenho prazos inatingíveis"),
    q(3, Demands, "Devo trabalhar muito intensamente"),
    q(4, Demands, "Eu não faço algumas tarefas porque tenho muita coisa para fazer"),
    q(5, Demands, "Não tenho possibilidade de fazer pausas suficientes"),
    q(6, Demands, "Recebo pressão para trabalhar em outro horário"),
    q(7, Demands, "Tenho que fazer meu trabalho com muita rapidez"),
    q(8, Demands, "As pausas temporárias são impossíveis de cumprir"),
    q(9, Control, "Posso decidir quando fazer uma pausa"),
    q(10, Control, "Consideram a minha opinião sobre a velocidade do meu trabalho"),
    q(11, Control, "Tenho liberdade de escolha de como fazer o meu trabalho"),
    q(12, Control, "Tenho liberdade de escolha para decidir o que fazer no trabalho"),
    q(13, Control, "Minhas sugestões são consideradas sobre como fazer meu trabalho"),
    q(14, Control, "O meu horário de trabalho pode ser flexível"),
    q(15, ManagerSupport, "Recebo informações e suporte que me ajudam no trabalho que eu faço"),
    q(16, ManagerSupport, "Posso confiar no meu chefe quando eu tiver problemas no trabalho"),
    q(17, ManagerSupport, "Quando algo no trabalho me perturba ou irrita posso falar com o meu chefe"),
    q(18, ManagerSupport, "Tenho suportado trabalhos emocionalmente exigentes"),
    q(19, ManagerSupport, "Meu chefe me incentiva no trabalho"),
    q(20, PeerSupport, "Quando o trabalho se torna difícil, posso contar com ajuda dos colegas"),
    q(21, PeerSupport, "Meus colegas me ajudam e me dão apoio quando eu preciso"),
    q(22, PeerSupport, "No trabalho os meus colegas demonstram o respeito que mereço"),
    q(23, PeerSupport, "Os colegas estão disponíveis para escutar os meus problemas de trabalho"),
    q(24, Relationships, "Falam ou se comportam comigo de forma dura"),
    q(25, Relationships, "Existem conflitos entre os colegas"),
    q(26, Relationships, "Sinto que sou perseguido no trabalho"),
    q(27, Relationships, "As relações no trabalho são tensas"),
    q(28, Role, "Tenho clareza sobre o que se espera do meu trabalho"),
    q(29, Role, "Eu sei como fazer o meu trabalho"),
    q(30, Role, "Estão claras as minhas tarefas e responsabilidades"),
    q(31, Role, "Os objetivos e metas do meu setor são claros para mim"),
    q(32, Role, "Eu vejo como o meu trabalho se encaixa nos objetivos da empresa"),
    q(33, Change, "Tenho oportunidades para pedir explicações ao chefe sobre as mudanças relacionadas ao meu trabalho"),
    q(34, Change, "As pessoas são sempre consultadas sobre as mudanças no trabalho"),
    q(35, Change, "Quando há mudanças, faço o meu trabalho com o mesmo carinho"),
];

pub fn question(id: QuestionId) -> Option<&'static Question> {
    QUESTIONS.iter().find(|question| question.id == id)
}

pub fn questions_for(dimension: Dimension) -> impl Iterator<Item = &'static Question> {
    QUESTIONS
        .iter()
        .filter(move |question| question.dimension == dimension)
}

/// Organizational units offered to respondents before the form starts.
pub const SECTORS: [&str; 17] = [
    "Diretoria / Alta Gestão / Administração Geral",
    "Administrativo / Escritório",
    "Financeiro / Contábil / Fiscal",
    "Recursos Humanos / Departamento Pessoal",
    "Jurídico / Compliance",
    "Comercial / Vendas",
    "Atendimento ao Cliente / SAC",
    "Produção / Operação / Prestação de Serviços",
    "Engenharia / Técnico / Manutenção",
    "Qualidade / Processos / Laboratório",
    "Logística / Estoque / Almoxarifado / Transporte",
    "Compras / Suprimentos",
    "Tecnologia da Informação (TI) / Sistemas",
    "Marketing / Comunicação",
    "Segurança do Trabalho / SESMT / Saúde Ocupacional",
    "Segurança Patrimonial / Portaria / Vigilância",
    "Serviços Gerais / Limpeza / Copa / Facilities",
];
