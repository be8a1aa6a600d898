//! The procedure catalog: fixed, read-only reference content.
//!
//! Entries are laid out in [`ProcedureId::ALL`] order, so lookup by id is an index and
//! cannot miss.

#![forbid(unsafe_code)]

use procsafe_types::{ProcedureId, ProcedureInfo, Reference};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("procedure not found: {0}")]
    NotFound(String),
}

/// Entry for `id`. Total over the closed set of ids.
pub fn get(id: ProcedureId) -> &'static ProcedureInfo {
    &PROCEDURES[id.index()]
}

/// Every entry, in stable catalog order.
pub fn list_all() -> &'static [ProcedureInfo] {
    &PROCEDURES
}

/// Boundary lookup for free-form identifiers.
pub fn lookup(identifier: &str) -> Result<&'static ProcedureInfo, CatalogError> {
    identifier
        .parse::<ProcedureId>()
        .map(get)
        .map_err(|e| CatalogError::NotFound(e.0))
}

static PROCEDURES: [ProcedureInfo; 5] = [
    ProcedureInfo {
        id: ProcedureId::IvCannulation,
        name: "Peripheral IV Cannulation",
        summary: "Insert a peripheral intravenous cannula for fluids, medications, or blood sampling.",
        contraindications: &[
            "Cellulitis or burns at intended site",
            "Lymphoedema or post-mastectomy arm (avoid)",
            "Ipsilateral AV fistula (avoid)",
            "Severe coagulopathy (relative)",
        ],
        considerations: &[
            "Consider ultrasound guidance if difficult access",
            "Use smallest gauge suitable for therapy",
            "Check allergies (latex, chlorhexidine)",
            "Aseptic non-touch technique (ANTT)",
        ],
        equipment: &[
            "Gloves, apron",
            "Skin prep (chlorhexidine 2% in alcohol or povidone-iodine if allergic)",
            "Tourniquet",
            "Cannula (14–24G) + dressing",
            "Flush + saline",
            "Sharps bin",
        ],
        red_flags: Some(&[
            "Suspected sepsis with poor access — escalate for senior/IO",
            "Known lymphoedema/AV fistula — avoid that arm",
        ]),
        references: Some(&[Reference {
            title: "Australian Commission on Safety and Quality in Health Care: Peripheral IV",
            url: "https://www.safetyandquality.gov.au/",
        }]),
    },
    ProcedureInfo {
        id: ProcedureId::Venepuncture,
        name: "Venepuncture (Phlebotomy)",
        summary: "Collect venous blood safely and aseptically.",
        contraindications: &[
            "Same as IV access (cellulitis, AV fistula, lymphoedema)",
            "Severe coagulopathy (relative)",
        ],
        considerations: &[
            "Check tests and required tubes",
            "Avoid IV infusing limb if possible",
            "Warm hand improves venous filling",
            "Check allergies (latex, chlorhexidine)",
        ],
        equipment: &[
            "Gloves",
            "Skin prep",
            "Tourniquet",
            "Needle/vacutainer + tubes",
            "Gauze + dressing",
            "Sharps bin",
        ],
        red_flags: None,
        references: None,
    },
    ProcedureInfo {
        id: ProcedureId::UrinaryCatheter,
        name: "Urinary Catheterisation",
        summary: "Insert urethral catheter for monitoring urine output or relieving retention.",
        contraindications: &[
            "Suspected urethral injury (blood at meatus, perineal ecchymosis)",
            "Pelvic fracture with high-riding prostate",
            "Urethral stricture (relative)",
        ],
        considerations: &[
            "Use smallest appropriate catheter size",
            "Consider suprapubic if urethral injury suspected (senior help)",
            "Check allergies (latex)",
            "Aseptic technique — infection prevention",
        ],
        equipment: &[
            "Sterile catheter kit (catheter, gloves, drape)",
            "Lubricant (lignocaine gel)",
            "Antiseptic",
            "Drainage bag",
        ],
        red_flags: Some(&[
            "Blood at meatus/pelvic trauma — do not insert; call urology",
            "Sepsis or obstructive uropathy — escalate",
        ]),
        references: None,
    },
    ProcedureInfo {
        id: ProcedureId::NgTube,
        name: "Nasogastric Tube Insertion",
        summary: "Insert NG tube for decompression or feeding.",
        contraindications: &[
            "Suspected basal skull or mid-face fracture",
            "Recent nasal surgery",
            "Esophageal varices (relative — senior input)",
            "Caustic ingestion (relative)",
        ],
        considerations: &[
            "Check patency of nares",
            "Sit patient up if possible",
            "Confirm position (pH aspirate/X-ray as per local policy)",
            "Check coagulation if bleeding risk",
        ],
        equipment: &[
            "NG tube appropriate size",
            "Lubricant",
            "pH paper",
            "Syringe",
            "Fixation device/tape",
        ],
        red_flags: Some(&[
            "Facial trauma/basal skull fracture — avoid nasal route",
            "Respiratory distress during insertion — stop",
        ]),
        references: None,
    },
    ProcedureInfo {
        id: ProcedureId::LumbarPuncture,
        name: "Lumbar Puncture",
        summary: "Obtain CSF for diagnostic purposes.",
        contraindications: &[
            "Signs of raised intracranial pressure (papilloedema, focal neurology)",
            "Coagulopathy/anticoagulation",
            "Local infection at puncture site",
            "Spinal cord mass lesion (suspected)",
        ],
        considerations: &[
            "Check coagulation, platelets",
            "Neuroimaging before LP if focal deficit/seizure/altered consciousness",
            "Positioning and analgesia/sedation considerations",
            "Consent and post-procedure advice",
        ],
        equipment: &[
            "LP kit (spinal needle, manometer)",
            "Antiseptic, sterile drape",
            "Local anaesthetic",
            "CSF collection tubes",
        ],
        red_flags: Some(&[
            "Suspicion of space-occupying lesion — image first",
            "Anticoagulated patient — correct before LP",
        ]),
        references: None,
    },
];
