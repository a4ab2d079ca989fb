use thiserror::Error;

/// Input rejected before any network call. The display text is shown to the
/// user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Veuillez remplir tous les champs")]
    MissingCredentials,

    #[error("Veuillez remplir tous les champs obligatoires")]
    MissingSelection,

    #[error("Veuillez saisir votre recommandation")]
    MissingRecommendation,

    #[error("Le champ Laboratoire est obligatoire")]
    MissingLab,

    #[error("Email et code utilisateur sont requis")]
    MissingAccountFields,

    #[error("Veuillez sélectionner une vue pour le rôle Responsable")]
    MissingScope,
}
