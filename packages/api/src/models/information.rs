use serde::{Deserialize, Serialize};

/// `{"data": [...]}` wrapper used by every list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Body of `POST /informations/add`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInformation {
    pub type_bu: String,
    pub type_info: String,
    pub laboratoire: String,
    pub produit: String,
    pub comment: String,
    /// RFC 3339 timestamp taken at submit time.
    pub info_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::InformationRecord;

    #[test]
    fn test_envelope_decodes_records() {
        let body = r#"{"data":[{"id":1,"type_bu":"CNS","type_info":"Nouveau Produit",
            "laboratoire":"SANOFI","produit_concurent":"Depakine","comment":null,
            "created_at":"2024-05-02T09:15:00Z","users":{"email":"d@labo.fr"}}]}"#;
        let env: DataEnvelope<InformationRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(env.data.len(), 1);
        assert_eq!(env.data[0].submitter_email(), Some("d@labo.fr"));
    }

    #[test]
    fn test_envelope_missing_data_is_empty() {
        let env: DataEnvelope<InformationRecord> = serde_json::from_str("{}").unwrap();
        assert!(env.data.is_empty());
    }

    #[test]
    fn test_new_information_field_names() {
        let body = NewInformation {
            type_bu: "CNS".into(),
            type_info: "Recommandation".into(),
            laboratoire: String::new(),
            produit: String::new(),
            comment: "Former les délégués".into(),
            info_date: "2024-05-02T09:15:00.000Z".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type_bu"], "CNS");
        assert_eq!(json["laboratoire"], "");
        assert_eq!(json["info_date"], "2024-05-02T09:15:00.000Z");
    }
}
