use resolvd_domain::ResourceRecord;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct QuestionDto {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub class: String,
}

impl QuestionDto {
    pub fn new(name: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            class: "IN".to_string(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct SectionDto {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub class: String,
    pub ttl: u32,
    pub rdlength: u16,
    pub rdata: String,
}

impl From<&ResourceRecord> for SectionDto {
    fn from(record: &ResourceRecord) -> Self {
        Self {
            name: record.name.to_string(),
            record_type: record.record_type.as_str().to_string(),
            class: record.class.to_string(),
            ttl: record.ttl,
            rdlength: record.rdlength,
            rdata: record.rdata.to_string(),
        }
    }
}

/// DNS message shape mirrored into JSON.
#[derive(Serialize, Debug, Clone)]
pub struct MessageResponse {
    pub question: Vec<QuestionDto>,
    pub answer: Vec<SectionDto>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authority: Vec<SectionDto>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<SectionDto>,
}

impl MessageResponse {
    pub fn new(question: QuestionDto, answers: &[ResourceRecord]) -> Self {
        Self {
            question: vec![question],
            answer: answers.iter().map(SectionDto::from).collect(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }
}
