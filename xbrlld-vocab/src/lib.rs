//! RDF and XBRL Vocabulary Constants
//!
//! This crate provides a centralized location for every IRI the XBRL → RDF
//! mapping engine emits or matches against.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf`, `rdfs`, `owl`, `xsd` - W3C core vocabularies
//! - `skos`, `qb`, `time` - vocabularies the derivation rules synthesize
//! - `xlink`, `link`, `xbrli`, `xbrldt` - XBRL 2.1 / Dimensions namespaces
//! - `arcrole`, `dim_arcrole`, `role` - standard arc-roles and link/label roles
//! - `xbrll` - the reporting vocabulary used for roles, concepts and facts
//! - `foundation` - namespaces whose elements are infrastructure, not concepts
//! - `prefixes` - the prefix table bound on every output dataset

/// RDF vocabulary constants
pub mod rdf {
    /// rdf: namespace
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:value IRI
    pub const VALUE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#value";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// rdfs: namespace
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:Class IRI
    pub const CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:isDefinedBy IRI
    pub const IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
}

/// OWL vocabulary constants
pub mod owl {
    /// owl: namespace
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";

    /// owl:sameAs IRI
    pub const SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
}

/// XSD vocabulary constants
///
/// Besides the datatypes, the engine borrows a handful of schema attribute
/// names (`id`, `abstract`, `nillable`, `substitutionGroup`) as predicates.
pub mod xsd {
    /// xsd: namespace
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:duration IRI
    pub const DURATION: &str = "http://www.w3.org/2001/XMLSchema#duration";

    /// xsd:id (used as the identifier predicate)
    pub const ID: &str = "http://www.w3.org/2001/XMLSchema#id";

    /// xsd:abstract (used as the abstract-flag predicate)
    pub const ABSTRACT: &str = "http://www.w3.org/2001/XMLSchema#abstract";

    /// xsd:nillable (used as the nillable-flag predicate)
    pub const NILLABLE: &str = "http://www.w3.org/2001/XMLSchema#nillable";

    /// xsd:substitutionGroup (used as the substitution-group predicate)
    pub const SUBSTITUTION_GROUP: &str = "http://www.w3.org/2001/XMLSchema#substitutionGroup";

    /// XML Schema target namespace (no fragment separator)
    pub const SCHEMA_NS: &str = "http://www.w3.org/2001/XMLSchema";
}

/// SKOS vocabulary constants
pub mod skos {
    /// skos: namespace
    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";

    /// skos:Concept IRI
    pub const CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";

    /// skos:ConceptScheme IRI
    pub const CONCEPT_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#ConceptScheme";

    /// skos:broader IRI
    pub const BROADER: &str = "http://www.w3.org/2004/02/skos/core#broader";

    /// skos:narrower IRI
    pub const NARROWER: &str = "http://www.w3.org/2004/02/skos/core#narrower";

    /// skos:inScheme IRI
    pub const IN_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#inScheme";
}

/// RDF Data Cube vocabulary constants
pub mod qb {
    /// qb: namespace
    pub const NS: &str = "http://purl.org/linked-data/cube#";

    /// qb:DataSet class
    pub const DATA_SET: &str = "http://purl.org/linked-data/cube#DataSet";

    /// qb:DataStructureDefinition class
    pub const DATA_STRUCTURE_DEFINITION: &str =
        "http://purl.org/linked-data/cube#DataStructureDefinition";

    /// qb:Observation class
    pub const OBSERVATION: &str = "http://purl.org/linked-data/cube#Observation";

    /// qb:MeasureProperty class
    pub const MEASURE_PROPERTY: &str = "http://purl.org/linked-data/cube#MeasureProperty";

    /// qb:DimensionProperty class
    pub const DIMENSION_PROPERTY: &str = "http://purl.org/linked-data/cube#DimensionProperty";

    /// qb:AttributeProperty class
    pub const ATTRIBUTE_PROPERTY: &str = "http://purl.org/linked-data/cube#AttributeProperty";

    /// qb:structure - links a dataset to its structure definition
    pub const STRUCTURE: &str = "http://purl.org/linked-data/cube#structure";

    /// qb:component - links a structure definition to a component specification
    pub const COMPONENT: &str = "http://purl.org/linked-data/cube#component";

    /// qb:measure component property
    pub const MEASURE: &str = "http://purl.org/linked-data/cube#measure";

    /// qb:dimension component property
    pub const DIMENSION: &str = "http://purl.org/linked-data/cube#dimension";

    /// qb:attribute component property
    pub const ATTRIBUTE: &str = "http://purl.org/linked-data/cube#attribute";

    /// qb:codeList IRI
    pub const CODE_LIST: &str = "http://purl.org/linked-data/cube#codeList";

    /// qb:measureType IRI
    pub const MEASURE_TYPE: &str = "http://purl.org/linked-data/cube#measureType";

    /// qb:obsValue IRI
    pub const OBS_VALUE: &str = "http://purl.org/linked-data/cube#obsValue";
}

/// OWL-Time constants
pub mod time {
    /// time:Interval IRI
    pub const INTERVAL: &str = "http://www.w3.org/2006/time#Interval";
}

/// XLink attribute names used as predicates on qualified arcs and resources
pub mod xlink {
    /// xlink: namespace (no fragment separator)
    pub const NS: &str = "http://www.w3.org/1999/xlink";

    /// xlink#role
    pub const ROLE: &str = "http://www.w3.org/1999/xlink#role";

    /// xlink#arcrole
    pub const ARCROLE: &str = "http://www.w3.org/1999/xlink#arcrole";

    /// xlink#from
    pub const FROM: &str = "http://www.w3.org/1999/xlink#from";

    /// xlink#to
    pub const TO: &str = "http://www.w3.org/1999/xlink#to";

    /// xlink#preferredLabel
    pub const PREFERRED_LABEL: &str = "http://www.w3.org/1999/xlink#preferredLabel";
}

/// XBRL 2.1 linkbase namespace constants
pub mod link {
    /// link target namespace
    pub const NS: &str = "http://www.xbrl.org/2003/linkbase";

    /// link#definition - human-readable role definition
    pub const DEFINITION: &str = "http://www.xbrl.org/2003/linkbase#definition";

    /// link#usedOn - elements a role type may be used on
    pub const USED_ON: &str = "http://www.xbrl.org/2003/linkbase#usedOn";

    /// link#order - arc order
    pub const ORDER: &str = "http://www.xbrl.org/2003/linkbase#order";
}

/// XBRL 2.1 instance namespace constants
pub mod xbrli {
    /// xbrli target namespace
    pub const NS: &str = "http://www.xbrl.org/2003/instance";

    /// xbrli#periodType
    pub const PERIOD_TYPE: &str = "http://www.xbrl.org/2003/instance#periodType";

    /// xbrli#balance
    pub const BALANCE: &str = "http://www.xbrl.org/2003/instance#balance";

    /// xbrli#typedDomainRef
    pub const TYPED_DOMAIN_REF: &str = "http://www.xbrl.org/2003/instance#typedDomainRef";

    /// Local names of the item types the fact value table dispatches on
    pub mod item_types {
        pub const BOOLEAN: &str = "booleanItemType";
        pub const MONETARY: &str = "monetaryItemType";
        pub const DECIMAL: &str = "decimalItemType";
        pub const SHARES: &str = "sharesItemType";
        pub const PURE: &str = "pureItemType";
        pub const DATE: &str = "dateItemType";
        pub const DURATION: &str = "durationItemType";
    }
}

/// XBRL Dimensions namespace constants
pub mod xbrldt {
    /// xbrldt target namespace
    pub const NS: &str = "http://xbrl.org/2005/xbrldt";

    /// xbrldt#dimensionItem - substitution group of dimension concepts
    pub const DIMENSION_ITEM: &str = "http://xbrl.org/2005/xbrldt#dimensionItem";

    /// xbrldt#hypercubeItem - substitution group of hypercube concepts
    pub const HYPERCUBE_ITEM: &str = "http://xbrl.org/2005/xbrldt#hypercubeItem";
}

/// Standard XBRL 2.1 arc-roles
pub mod arcrole {
    /// arcrole: namespace
    pub const NS: &str = "http://www.xbrl.org/2003/arcrole/";

    pub const PARENT_CHILD: &str = "http://www.xbrl.org/2003/arcrole/parent-child";
    pub const SUMMATION_ITEM: &str = "http://www.xbrl.org/2003/arcrole/summation-item";
    pub const GENERAL_SPECIAL: &str = "http://www.xbrl.org/2003/arcrole/general-special";
    pub const ESSENCE_ALIAS: &str = "http://www.xbrl.org/2003/arcrole/essence-alias";
    pub const SIMILAR_TUPLES: &str = "http://www.xbrl.org/2003/arcrole/similar-tuples";
    pub const REQUIRES_ELEMENT: &str = "http://www.xbrl.org/2003/arcrole/requires-element";
    pub const CONCEPT_LABEL: &str = "http://www.xbrl.org/2003/arcrole/concept-label";
    pub const CONCEPT_REFERENCE: &str = "http://www.xbrl.org/2003/arcrole/concept-reference";

    /// Arc-roles every taxonomy conversion considers, declared or not
    pub const STANDARD: [&str; 8] = [
        PARENT_CHILD,
        SUMMATION_ITEM,
        GENERAL_SPECIAL,
        ESSENCE_ALIAS,
        SIMILAR_TUPLES,
        REQUIRES_ELEMENT,
        CONCEPT_LABEL,
        CONCEPT_REFERENCE,
    ];
}

/// XBRL Dimensions arc-roles
pub mod dim_arcrole {
    /// dimarcrole: namespace
    pub const NS: &str = "http://xbrl.org/int/dim/arcrole/";

    pub const ALL: &str = "http://xbrl.org/int/dim/arcrole/all";
    pub const NOT_ALL: &str = "http://xbrl.org/int/dim/arcrole/notAll";
    pub const HYPERCUBE_DIMENSION: &str = "http://xbrl.org/int/dim/arcrole/hypercube-dimension";
    pub const DIMENSION_DOMAIN: &str = "http://xbrl.org/int/dim/arcrole/dimension-domain";
    pub const DIMENSION_DEFAULT: &str = "http://xbrl.org/int/dim/arcrole/dimension-default";
    pub const DOMAIN_MEMBER: &str = "http://xbrl.org/int/dim/arcrole/domain-member";

    /// Every dimensional arc-role
    pub const ALL_ARCROLES: [&str; 6] = [
        ALL,
        NOT_ALL,
        HYPERCUBE_DIMENSION,
        DIMENSION_DOMAIN,
        DIMENSION_DEFAULT,
        DOMAIN_MEMBER,
    ];
}

/// Standard link and label roles
pub mod role {
    /// role (2003) namespace
    pub const NS_2003: &str = "http://www.xbrl.org/2003/role/";

    /// role (2009) namespace
    pub const NS_2009: &str = "http://www.xbrl.org/2009/role/";

    /// The default extended link role
    pub const LINK: &str = "http://www.xbrl.org/2003/role/link";

    /// The standard label role
    pub const LABEL: &str = "http://www.xbrl.org/2003/role/label";
}

/// Reporting vocabulary (`xbrll:`)
pub mod xbrll {
    /// xbrll: namespace
    pub const NS: &str = "https://w3id.org/vocab/xbrll#";

    // Classes
    pub const ROLE: &str = "https://w3id.org/vocab/xbrll#Role";
    pub const CONCEPT_CLASS: &str = "https://w3id.org/vocab/xbrll#Concept";
    pub const REPORT: &str = "https://w3id.org/vocab/xbrll#Report";
    pub const FACT: &str = "https://w3id.org/vocab/xbrll#Fact";

    // Structural tags
    pub const PRIMARY_ITEM: &str = "https://w3id.org/vocab/xbrll#PrimaryItem";
    pub const HYPERCUBE: &str = "https://w3id.org/vocab/xbrll#Hypercube";
    pub const DIMENSION: &str = "https://w3id.org/vocab/xbrll#Dimension";
    pub const DIMENSION_DOMAIN: &str = "https://w3id.org/vocab/xbrll#DimensionDomain";
    pub const DIMENSION_DEFAULT: &str = "https://w3id.org/vocab/xbrll#DimensionDefault";
    pub const DOMAIN_MEMBER: &str = "https://w3id.org/vocab/xbrll#DomainMember";

    // Fact properties
    pub const HAS_FACT: &str = "https://w3id.org/vocab/xbrll#hasFact";
    pub const CONCEPT: &str = "https://w3id.org/vocab/xbrll#concept";
    pub const VALUE: &str = "https://w3id.org/vocab/xbrll#value";
    pub const DECIMALS: &str = "https://w3id.org/vocab/xbrll#decimals";
    pub const PRECISION: &str = "https://w3id.org/vocab/xbrll#precision";
    pub const HAS_ENTITY: &str = "https://w3id.org/vocab/xbrll#hasEntity";
    pub const PERIOD: &str = "https://w3id.org/vocab/xbrll#period";
    pub const START_PERIOD: &str = "https://w3id.org/vocab/xbrll#startPeriod";
    pub const END_PERIOD: &str = "https://w3id.org/vocab/xbrll#endPeriod";
    pub const UNIT_REF: &str = "https://w3id.org/vocab/xbrll#unitRef";
    pub const NUMERATOR: &str = "https://w3id.org/vocab/xbrll#numerator";
    pub const DENOMINATOR: &str = "https://w3id.org/vocab/xbrll#denominator";
}

/// Namespaces whose elements are XBRL infrastructure rather than reportable
/// concepts. Concepts owned by these namespaces are never extracted.
pub mod foundation {
    use super::{link, xbrldt, xbrli, xlink, xsd};

    /// Generic link namespace (xl)
    pub const XL: &str = "http://www.xbrl.org/2003/XLink";

    /// 2004 reference parts
    pub const REF_2004: &str = "http://www.xbrl.org/2004/ref";

    /// 2006 reference parts
    pub const REF_2006: &str = "http://www.xbrl.org/2006/ref";

    /// Every excluded namespace
    pub const EXCLUDED: [&str; 8] = [
        link::NS,
        xbrldt::NS,
        xbrli::NS,
        XL,
        xlink::NS,
        xsd::SCHEMA_NS,
        REF_2004,
        REF_2006,
    ];

    /// Check whether a namespace belongs to the excluded foundation set
    #[inline]
    pub fn is_excluded(namespace: &str) -> bool {
        EXCLUDED.contains(&namespace)
    }
}

/// JSON-LD context constants
pub mod jsonld {
    /// Default `@vocab` of emitted contexts (xbrl-json)
    pub const XBRL_JSON_VOCAB: &str = "https://xbrl.org/CR/2021-07-07/xbrl-json#";
}

/// Prefix bindings applied to every dataset the engine produces
pub mod prefixes {
    /// (prefix, namespace) pairs in binding order
    pub const BINDINGS: [(&str, &str); 16] = [
        ("rdf", super::rdf::NS),
        ("rdfs", super::rdfs::NS),
        ("owl", super::owl::NS),
        ("xsd", super::xsd::NS),
        ("skos", super::skos::NS),
        ("qb", super::qb::NS),
        ("arcrole", super::arcrole::NS),
        ("dimarcrole", super::dim_arcrole::NS),
        ("link", "http://www.xbrl.org/2003/linkbase#"),
        ("role2003", super::role::NS_2003),
        ("role2009", super::role::NS_2009),
        ("xbrll", super::xbrll::NS),
        ("xbrldt", "http://xbrl.org/2005/xbrldt#"),
        ("xbrli", "http://www.xbrl.org/2003/instance#"),
        ("xlink", "http://www.w3.org/1999/xlink#"),
        ("time", "http://www.w3.org/2006/time#"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaces_prefix_their_terms() {
        assert!(qb::MEASURE_TYPE.starts_with(qb::NS));
        assert!(skos::BROADER.starts_with(skos::NS));
        assert!(xbrll::HAS_FACT.starts_with(xbrll::NS));
        assert!(dim_arcrole::DOMAIN_MEMBER.starts_with(dim_arcrole::NS));
        assert!(arcrole::PARENT_CHILD.starts_with(arcrole::NS));
    }

    #[test]
    fn test_foundation_exclusions() {
        assert!(foundation::is_excluded("http://www.xbrl.org/2003/instance"));
        assert!(foundation::is_excluded("http://www.w3.org/2001/XMLSchema"));
        assert!(!foundation::is_excluded("http://fasb.org/us-gaap/2024"));
    }

    #[test]
    fn test_prefix_bindings_are_unique() {
        let mut names: Vec<_> = prefixes::BINDINGS.iter().map(|(p, _)| *p).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), prefixes::BINDINGS.len());
    }
}
