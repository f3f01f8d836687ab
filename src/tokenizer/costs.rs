//! Static token cost table for the reference tokenizer (cl100k_base).
//!
//! Lookup keys are lowercase. The table covers every live dictionary entry
//! (original and replacement), every retired entry in [`HISTORICAL_ENTRIES`],
//! and common English function words, so the built-in counter can price a
//! decoder line without shipping a BPE vocabulary.
//!
//! Regenerate after editing the dictionaries:
//!
//! ```text
//! tokenshrink verify --emit-costs > costs.rs.new
//! ```

use phf::{phf_map, phf_set};

/// Token cost per known word or phrase (cl100k_base).
pub static TOKEN_COSTS: phf::Map<&'static str, usize> = phf_map! {
    "&" => 1,
    "(above)" => 3,
    "(below)" => 3,
    "(now)" => 2,
    "a" => 1,
    "a large number of" => 4,
    "a lot of" => 3,
    "a number of" => 3,
    "a significant number of" => 5,
    "a variety of" => 3,
    "a wide range of" => 4,
    "a wide variety of" => 4,
    "ability" => 1,
    "able" => 1,
    "about" => 1,
    "abs" => 1,
    "abstract" => 1,
    "abt" => 1,
    "accordance" => 1,
    "account" => 1,
    "addition" => 1,
    "additionally" => 2,
    "addr" => 1,
    "address" => 1,
    "admin" => 1,
    "administrator" => 1,
    "aforementioned" => 3,
    "after" => 1,
    "agmt" => 2,
    "agreement" => 1,
    "all" => 1,
    "along" => 1,
    "along with" => 2,
    "also" => 1,
    "alternatively" => 2,
    "altho" => 2,
    "although" => 1,
    "always" => 1,
    "always consider" => 2,
    "always remember to" => 3,
    "an" => 1,
    "analyze" => 1,
    "and" => 1,
    "and so forth" => 3,
    "and so on" => 3,
    "anlyz" => 2,
    "answering" => 1,
    "any" => 1,
    "app" => 1,
    "application" => 1,
    "appropriate" => 1,
    "approximately" => 1,
    "are" => 1,
    "arg" => 1,
    "args" => 1,
    "argument" => 1,
    "arguments" => 1,
    "arr" => 1,
    "array" => 1,
    "as" => 1,
    "as a consequence of" => 4,
    "as a result of" => 4,
    "as much as possible" => 4,
    "as opposed to" => 4,
    "as well as" => 3,
    "assuming" => 1,
    "assuming that" => 2,
    "async" => 1,
    "asynchronous" => 2,
    "at" => 1,
    "at all times" => 4,
    "at core" => 2,
    "at that point" => 3,
    "at the current time" => 4,
    "at the present time" => 4,
    "at the same time" => 4,
    "at this point" => 3,
    "at this point in time" => 5,
    "attr" => 1,
    "attribute" => 1,
    "attributes" => 1,
    "attrs" => 2,
    "auth" => 1,
    "authentication" => 1,
    "authorization" => 1,
    "authz" => 2,
    "auto" => 1,
    "automatically" => 2,
    "avail" => 1,
    "available" => 1,
    "aware" => 1,
    "based on" => 2,
    "basis" => 1,
    "bc" => 1,
    "be" => 1,
    "be aware of" => 3,
    "be aware that" => 3,
    "be sure to" => 3,
    "because" => 1,
    "been" => 1,
    "before" => 1,
    "behalf" => 1,
    "being" => 1,
    "between" => 1,
    "bool" => 1,
    "boolean" => 1,
    "btwn" => 2,
    "by" => 1,
    "by means of" => 3,
    "by way of" => 3,
    "calc" => 1,
    "calculate" => 1,
    "callback" => 1,
    "can" => 1,
    "cannot" => 1,
    "case" => 1,
    "cb" => 1,
    "cert" => 1,
    "certificate" => 1,
    "cetera" => 2,
    "cfg" => 1,
    "cmd" => 1,
    "cmds" => 2,
    "cnsdr" => 3,
    "code" => 1,
    "coll" => 1,
    "collection" => 1,
    "comes" => 1,
    "command" => 1,
    "commands" => 1,
    "communicate" => 1,
    "comp" => 1,
    "compliance" => 1,
    "component" => 1,
    "comprehensive" => 2,
    "cond" => 1,
    "condition" => 1,
    "configuration" => 1,
    "conn" => 1,
    "connection" => 1,
    "consequence" => 1,
    "consequently" => 3,
    "consider" => 1,
    "consideration" => 2,
    "considerations" => 2,
    "consistently" => 3,
    "const" => 1,
    "constant" => 1,
    "constructor" => 1,
    "context" => 1,
    "controller" => 1,
    "convey" => 1,
    "critical" => 1,
    "crucial" => 1,
    "ctor" => 1,
    "ctrl" => 1,
    "ctx" => 1,
    "curr" => 1,
    "current" => 1,
    "currently" => 1,
    "data" => 1,
    "database" => 1,
    "db" => 1,
    "dealing" => 1,
    "def" => 1,
    "defendant" => 2,
    "deliverable" => 2,
    "dep" => 1,
    "department" => 1,
    "dependencies" => 1,
    "dependency" => 1,
    "deps" => 1,
    "dept" => 1,
    "desc" => 1,
    "description" => 1,
    "deserial" => 3,
    "deserialization" => 3,
    "despite" => 1,
    "dest" => 1,
    "destination" => 1,
    "destructor" => 2,
    "determine" => 1,
    "dev" => 1,
    "development" => 1,
    "diagnosis" => 2,
    "did" => 1,
    "diff" => 1,
    "different" => 1,
    "dir" => 1,
    "directory" => 1,
    "dlv" => 2,
    "do" => 1,
    "do not forget to" => 4,
    "docs" => 1,
    "documentation" => 1,
    "does" => 1,
    "does not have the ability to" => 6,
    "down" => 1,
    "dtor" => 2,
    "dtrmn" => 3,
    "due" => 1,
    "due to the fact that" => 5,
    "dx" => 1,
    "e.g." => 3,
    "each" => 1,
    "each and every" => 3,
    "el" => 1,
    "element" => 1,
    "elements" => 1,
    "els" => 1,
    "encap" => 2,
    "encapsulation" => 2,
    "endpoint" => 1,
    "ensure" => 1,
    "env" => 1,
    "environment" => 1,
    "ep" => 1,
    "esp" => 1,
    "essential" => 1,
    "et cetera" => 3,
    "etc." => 2,
    "event" => 1,
    "every" => 1,
    "ex" => 1,
    "exam" => 1,
    "examination" => 2,
    "example" => 1,
    "examples" => 1,
    "exc" => 1,
    "except" => 1,
    "exception" => 1,
    "exec" => 1,
    "execute" => 1,
    "expected" => 1,
    "explain" => 1,
    "expln" => 2,
    "expr" => 1,
    "expression" => 1,
    "exs" => 2,
    "fact" => 1,
    "factor" => 1,
    "factors" => 1,
    "features" => 1,
    "file" => 1,
    "files" => 1,
    "first" => 1,
    "first and foremost" => 3,
    "fllwng" => 3,
    "fn" => 1,
    "following" => 1,
    "for" => 1,
    "for example" => 2,
    "for the purpose of" => 4,
    "for the reason that" => 4,
    "for the sake of" => 4,
    "foremost" => 1,
    "forget" => 1,
    "forth" => 1,
    "from" => 1,
    "full" => 1,
    "function" => 1,
    "functionality" => 2,
    "fundamentally" => 3,
    "gen" => 1,
    "generation" => 1,
    "given" => 1,
    "given that" => 2,
    "goal" => 1,
    "had" => 1,
    "hand" => 1,
    "handle" => 1,
    "has" => 1,
    "has the ability to" => 4,
    "have" => 1,
    "he" => 1,
    "help" => 1,
    "here" => 1,
    "hereby" => 2,
    "hereinafter" => 3,
    "hlp" => 2,
    "hndl" => 2,
    "hosp" => 2,
    "hospital" => 1,
    "how" => 1,
    "however" => 1,
    "i" => 1,
    "i.e." => 3,
    "id" => 1,
    "identifier" => 1,
    "identifiers" => 2,
    "identify" => 1,
    "idntfy" => 3,
    "ids" => 1,
    "idx" => 1,
    "if" => 1,
    "if unknown" => 2,
    "if unsure" => 2,
    "if you are not sure" => 5,
    "if you are unsure" => 4,
    "if you do not know" => 5,
    "iface" => 1,
    "immediately" => 2,
    "impl" => 1,
    "implement" => 1,
    "implementation" => 1,
    "important" => 1,
    "improve" => 1,
    "imprv" => 2,
    "in" => 1,
    "in a manner that" => 4,
    "in accordance with" => 3,
    "in addition" => 2,
    "in addition to" => 3,
    "in compliance with" => 3,
    "in it" => 2,
    "in order to" => 3,
    "in other words" => 3,
    "in regard to" => 3,
    "in relation to" => 3,
    "in spite of" => 3,
    "in terms of" => 3,
    "in that case" => 3,
    "in the case of" => 4,
    "in the case that" => 4,
    "in the event that" => 4,
    "in the process of" => 4,
    "in this case" => 3,
    "incl" => 1,
    "inclg" => 2,
    "incls" => 2,
    "include" => 1,
    "includes" => 1,
    "including" => 1,
    "index" => 1,
    "info" => 1,
    "information" => 1,
    "infra" => 1,
    "infrastructure" => 2,
    "inherit" => 1,
    "inheritance" => 2,
    "init" => 1,
    "initialize" => 1,
    "insofar as" => 4,
    "instead" => 1,
    "instead of" => 2,
    "int" => 1,
    "integer" => 1,
    "intention" => 1,
    "interface" => 1,
    "into" => 1,
    "is" => 1,
    "is able to" => 3,
    "is unable to" => 3,
    "it" => 1,
    "it is also essential to" => 5,
    "it is also important to" => 5,
    "it is critical to" => 4,
    "it is crucial to" => 4,
    "it is essential to" => 4,
    "it is important to" => 4,
    "it is important to note that" => 6,
    "it is necessary to" => 4,
    "it is possible that" => 4,
    "it is recommended to" => 4,
    "it is vital to" => 4,
    "it is worth noting that" => 5,
    "it should be noted that" => 5,
    "iter" => 1,
    "iteration" => 1,
    "its" => 1,
    "juris" => 2,
    "jurisdiction" => 2,
    "just" => 1,
    "k8s" => 3,
    "keep" => 1,
    "keep in mind that" => 4,
    "know" => 1,
    "kubernetes" => 2,
    "lab" => 1,
    "laboratory" => 2,
    "large" => 1,
    "len" => 1,
    "length" => 1,
    "less" => 1,
    "lib" => 1,
    "libraries" => 1,
    "library" => 1,
    "libs" => 1,
    "lot" => 1,
    "main" => 1,
    "major" => 1,
    "make" => 1,
    "make sure that" => 3,
    "make sure to" => 3,
    "manage" => 1,
    "management" => 1,
    "manner" => 1,
    "many" => 1,
    "max" => 1,
    "maximally" => 2,
    "maximum" => 1,
    "me" => 1,
    "means" => 1,
    "med" => 1,
    "medication" => 2,
    "medications" => 1,
    "meds" => 1,
    "mem" => 1,
    "memory" => 1,
    "message" => 1,
    "methodically" => 2,
    "mgmt" => 2,
    "microservice" => 2,
    "middleware" => 1,
    "min" => 1,
    "mind" => 1,
    "minimum" => 1,
    "mng" => 2,
    "more" => 1,
    "most" => 1,
    "msg" => 1,
    "much" => 1,
    "must" => 1,
    "mw" => 1,
    "my" => 1,
    "nav" => 1,
    "navigation" => 1,
    "ncsry" => 3,
    "necessary" => 1,
    "need" => 1,
    "nil" => 1,
    "no" => 1,
    "not" => 1,
    "note" => 1,
    "note:" => 2,
    "noted" => 1,
    "notif" => 2,
    "notification" => 1,
    "noting" => 1,
    "notwithstanding" => 1,
    "now" => 1,
    "null" => 1,
    "null and void" => 3,
    "num" => 1,
    "number" => 1,
    "obj" => 1,
    "object" => 1,
    "of" => 1,
    "of it" => 2,
    "ok" => 1,
    "on" => 1,
    "on a regular basis" => 4,
    "on account of" => 3,
    "on behalf of" => 3,
    "on the basis of" => 4,
    "on the other hand" => 4,
    "one" => 1,
    "only" => 1,
    "op" => 1,
    "operation" => 1,
    "operations" => 1,
    "ops" => 1,
    "opt" => 1,
    "optim" => 2,
    "optimization" => 1,
    "optimizations" => 2,
    "optims" => 2,
    "optional" => 1,
    "or" => 1,
    "order" => 1,
    "org" => 1,
    "organization" => 1,
    "orig" => 1,
    "original" => 1,
    "other" => 1,
    "our" => 1,
    "out" => 1,
    "over" => 1,
    "owing" => 1,
    "owing to the fact that" => 5,
    "package" => 1,
    "packages" => 1,
    "para" => 1,
    "paragraph" => 1,
    "param" => 1,
    "parameter" => 1,
    "particularly" => 1,
    "patient" => 1,
    "per" => 1,
    "perf" => 1,
    "performance" => 1,
    "perm" => 1,
    "permission" => 1,
    "permissions" => 1,
    "perms" => 2,
    "pkg" => 1,
    "pkgs" => 2,
    "pl" => 1,
    "plaintiff" => 3,
    "plan" => 1,
    "please" => 1,
    "please ensure that" => 3,
    "please make sure to" => 4,
    "please note that" => 3,
    "pls" => 1,
    "point" => 1,
    "poly" => 1,
    "polymorphism" => 3,
    "possibility" => 1,
    "possible" => 1,
    "possibly" => 1,
    "potential" => 1,
    "prescription" => 2,
    "present" => 1,
    "prev" => 1,
    "previous" => 1,
    "primary" => 1,
    "prior" => 1,
    "prior to" => 2,
    "process" => 1,
    "prod" => 1,
    "production" => 1,
    "prop" => 1,
    "proper" => 1,
    "properties" => 1,
    "property" => 1,
    "props" => 1,
    "provide" => 1,
    "provided" => 1,
    "provided that" => 2,
    "provides" => 1,
    "prvd" => 2,
    "prvds" => 3,
    "pt" => 1,
    "ptntl" => 3,
    "purpose" => 1,
    "pursuant" => 3,
    "pursuant to" => 4,
    "q" => 1,
    "quarterly" => 2,
    "range" => 1,
    "rather" => 1,
    "rather than" => 2,
    "rcmnd" => 3,
    "re:" => 2,
    "reason" => 1,
    "recommend" => 1,
    "recommended" => 1,
    "ref" => 1,
    "reference" => 1,
    "regard" => 1,
    "regardless" => 1,
    "regardless of" => 2,
    "regular" => 1,
    "regularly" => 1,
    "relation" => 1,
    "relevant" => 1,
    "remember" => 1,
    "remember to" => 2,
    "repo" => 1,
    "repository" => 1,
    "req" => 1,
    "reqd" => 2,
    "reqs" => 2,
    "request" => 1,
    "required" => 1,
    "requirements" => 1,
    "res" => 1,
    "resource" => 1,
    "resources" => 1,
    "respect" => 1,
    "respectively" => 2,
    "respond" => 1,
    "responding" => 1,
    "response" => 1,
    "responsibility" => 1,
    "responsible" => 1,
    "result" => 1,
    "ret" => 1,
    "return" => 1,
    "review" => 1,
    "rlvnt" => 3,
    "rsc" => 2,
    "rscs" => 2,
    "rspnd" => 2,
    "rvw" => 2,
    "rx" => 1,
    "sadly" => 1,
    "sake" => 1,
    "same" => 1,
    "serial" => 2,
    "serialization" => 2,
    "several" => 1,
    "sgst" => 2,
    "sh" => 1,
    "shd" => 2,
    "she" => 1,
    "should" => 1,
    "significant" => 2,
    "simultaneously" => 2,
    "since" => 1,
    "so" => 1,
    "so as to" => 3,
    "so that" => 2,
    "some" => 1,
    "source" => 1,
    "spcfc" => 3,
    "spec" => 1,
    "specific" => 1,
    "specifically" => 2,
    "specification" => 2,
    "spite" => 1,
    "src" => 1,
    "stakeholder" => 2,
    "step" => 1,
    "step by step" => 3,
    "steps" => 1,
    "stepwise" => 2,
    "str" => 1,
    "string" => 1,
    "sub" => 1,
    "subscription" => 1,
    "subsec" => 2,
    "subsection" => 2,
    "subsequent" => 1,
    "subsequent to" => 2,
    "successfully" => 2,
    "such as" => 2,
    "suggest" => 1,
    "sure" => 1,
    "sx" => 1,
    "symptoms" => 2,
    "sync" => 1,
    "synchronize" => 2,
    "systematically" => 2,
    "take" => 1,
    "take into account" => 3,
    "take into consideration" => 4,
    "task" => 1,
    "tasked" => 1,
    "temp" => 1,
    "temperature" => 1,
    "temporary" => 1,
    "terms" => 1,
    "test" => 1,
    "text" => 1,
    "than" => 1,
    "that" => 1,
    "that is" => 2,
    "the" => 1,
    "the fact that" => 3,
    "them" => 1,
    "then" => 1,
    "there" => 1,
    "there is a need to" => 5,
    "there is a possibility that" => 5,
    "therein" => 2,
    "thereof" => 2,
    "these" => 1,
    "they" => 1,
    "this" => 1,
    "tho" => 1,
    "those" => 1,
    "though" => 1,
    "three" => 1,
    "through" => 1,
    "thru" => 1,
    "time" => 1,
    "tmp" => 1,
    "to" => 1,
    "to the extent that" => 4,
    "together" => 1,
    "together with" => 2,
    "transaction" => 1,
    "treatment" => 2,
    "two" => 1,
    "tx" => 1,
    "txn" => 1,
    "u" => 1,
    "unable" => 1,
    "undef" => 2,
    "undefined" => 1,
    "under" => 1,
    "understand" => 1,
    "undrstd" => 3,
    "unfortunately" => 1,
    "unless" => 1,
    "unless and until" => 3,
    "unsure" => 1,
    "until" => 1,
    "up" => 1,
    "ur" => 1,
    "us" => 1,
    "use" => 1,
    "used" => 1,
    "user" => 1,
    "users" => 1,
    "using" => 1,
    "util" => 1,
    "utilities" => 1,
    "utility" => 1,
    "utils" => 1,
    "validate" => 1,
    "value" => 1,
    "values" => 1,
    "var" => 1,
    "variable" => 1,
    "variety" => 1,
    "various" => 1,
    "very" => 1,
    "via" => 1,
    "vital" => 1,
    "vldt" => 2,
    "void" => 1,
    "vs" => 1,
    "vuln" => 2,
    "vulnerabilities" => 2,
    "vulnerability" => 2,
    "vulns" => 2,
    "w/o" => 3,
    "was" => 1,
    "way" => 1,
    "wd" => 1,
    "we" => 1,
    "well" => 1,
    "were" => 1,
    "what" => 1,
    "when" => 1,
    "when answering" => 2,
    "when dealing with" => 3,
    "when it comes to" => 4,
    "when responding to" => 3,
    "when working with" => 3,
    "where" => 1,
    "whereas" => 2,
    "which" => 1,
    "who" => 1,
    "why" => 1,
    "wide" => 1,
    "will" => 1,
    "with" => 1,
    "with regard to" => 3,
    "with respect to" => 3,
    "with the exception of" => 4,
    "with the goal of" => 4,
    "with the help of" => 4,
    "with the intention of" => 4,
    "without" => 1,
    "working" => 1,
    "worth" => 1,
    "would" => 1,
    "write" => 1,
    "yes" => 1,
    "you" => 1,
    "you are expected to" => 4,
    "you are responsible for" => 4,
    "you are tasked with" => 4,
    "you have to" => 3,
    "you must" => 2,
    "you need to" => 3,
    "you should" => 2,
    "you will need to" => 4,
    "your" => 1,
    "your goal is to" => 4,
    "your main task is to" => 5,
    "your primary responsibility is to" => 5,
    "~" => 1,
    "µsvc" => 2,
};

/// Originals whose abbreviation saves zero tokens. Never applied.
pub static ZERO_SAVINGS: phf::Set<&'static str> = phf_set! {
    "about",
    "abstract",
    "address",
    "administrator",
    "aforementioned",
    "application",
    "appropriate",
    "approximately",
    "argument",
    "arguments",
    "array",
    "attribute",
    "authentication",
    "available",
    "because",
    "boolean",
    "calculate",
    "callback",
    "certificate",
    "collection",
    "command",
    "communicate",
    "component",
    "condition",
    "configuration",
    "connection",
    "constant",
    "constructor",
    "context",
    "controller",
    "current",
    "database",
    "deliverable",
    "department",
    "dependencies",
    "dependency",
    "description",
    "deserialization",
    "destination",
    "destructor",
    "development",
    "different",
    "directory",
    "documentation",
    "element",
    "elements",
    "encapsulation",
    "endpoint",
    "environment",
    "example",
    "exception",
    "execute",
    "expression",
    "function",
    "generation",
    "hereby",
    "hereinafter",
    "identifier",
    "implement",
    "implementation",
    "in other words",
    "include",
    "index",
    "information",
    "initialize",
    "integer",
    "interface",
    "iteration",
    "jurisdiction",
    "length",
    "libraries",
    "library",
    "maximum",
    "medications",
    "memory",
    "message",
    "microservice",
    "middleware",
    "minimum",
    "navigation",
    "notwithstanding",
    "null",
    "number",
    "object",
    "operation",
    "operations",
    "optimizations",
    "optional",
    "organization",
    "original",
    "package",
    "paragraph",
    "parameter",
    "particularly",
    "patient",
    "performance",
    "permission",
    "please",
    "previous",
    "production",
    "properties",
    "property",
    "reference",
    "repository",
    "request",
    "response",
    "return",
    "serialization",
    "source",
    "string",
    "subscription",
    "subsection",
    "systematically",
    "temperature",
    "temporary",
    "therein",
    "thereof",
    "though",
    "through",
    "to the extent that",
    "transaction",
    "unfortunately",
    "utilities",
    "utility",
    "variable",
    "vulnerabilities",
    "vulnerability",
    "would",
    "you",
    "your",
};

/// Originals whose abbreviation costs more tokens than it saves. Never applied.
pub static NEGATIVE_SAVINGS: phf::Set<&'static str> = phf_set! {
    "agreement",
    "although",
    "analyze",
    "attributes",
    "authorization",
    "between",
    "commands",
    "consider",
    "determine",
    "examples",
    "explain",
    "following",
    "for example",
    "handle",
    "help",
    "hospital",
    "identify",
    "improve",
    "includes",
    "including",
    "kubernetes",
    "manage",
    "management",
    "necessary",
    "notification",
    "optimization",
    "packages",
    "permissions",
    "potential",
    "provide",
    "provides",
    "recommend",
    "relevant",
    "required",
    "requirements",
    "resource",
    "resources",
    "respond",
    "review",
    "should",
    "specific",
    "such as",
    "suggest",
    "that is",
    "undefined",
    "understand",
    "validate",
    "without",
};

/// Every original -> replacement pair ever evaluated, including ones retired
/// from the live dictionaries. Kept so the savings sets stay reproducible.
pub static HISTORICAL_ENTRIES: &[(&str, &str)] = &[
    ("function", "fn"),
    ("variable", "var"),
    ("constant", "const"),
    ("parameter", "param"),
    ("argument", "arg"),
    ("return", "ret"),
    ("string", "str"),
    ("number", "num"),
    ("boolean", "bool"),
    ("integer", "int"),
    ("array", "arr"),
    ("object", "obj"),
    ("undefined", "undef"),
    ("null", "nil"),
    ("database", "db"),
    ("configuration", "cfg"),
    ("authentication", "auth"),
    ("authorization", "authz"),
    ("application", "app"),
    ("environment", "env"),
    ("development", "dev"),
    ("production", "prod"),
    ("repository", "repo"),
    ("directory", "dir"),
    ("message", "msg"),
    ("request", "req"),
    ("response", "res"),
    ("information", "info"),
    ("description", "desc"),
    ("documentation", "docs"),
    ("implementation", "impl"),
    ("initialize", "init"),
    ("temperature", "temp"),
    ("maximum", "max"),
    ("minimum", "min"),
    ("administrator", "admin"),
    ("management", "mgmt"),
    ("component", "comp"),
    ("performance", "perf"),
    ("reference", "ref"),
    ("property", "prop"),
    ("properties", "props"),
    ("attribute", "attr"),
    ("attributes", "attrs"),
    ("element", "el"),
    ("elements", "els"),
    ("index", "idx"),
    ("length", "len"),
    ("previous", "prev"),
    ("current", "curr"),
    ("temporary", "tmp"),
    ("calculate", "calc"),
    ("generation", "gen"),
    ("original", "orig"),
    ("destination", "dest"),
    ("source", "src"),
    ("memory", "mem"),
    ("address", "addr"),
    ("context", "ctx"),
    ("expression", "expr"),
    ("condition", "cond"),
    ("callback", "cb"),
    ("middleware", "mw"),
    ("transaction", "txn"),
    ("connection", "conn"),
    ("exception", "exc"),
    ("collection", "coll"),
    ("iteration", "iter"),
    ("navigation", "nav"),
    ("notification", "notif"),
    ("subscription", "sub"),
    ("certificate", "cert"),
    ("dependency", "dep"),
    ("dependencies", "deps"),
    ("package", "pkg"),
    ("packages", "pkgs"),
    ("library", "lib"),
    ("libraries", "libs"),
    ("utility", "util"),
    ("utilities", "utils"),
    ("example", "ex"),
    ("examples", "exs"),
    ("synchronize", "sync"),
    ("asynchronous", "async"),
    ("execute", "exec"),
    ("command", "cmd"),
    ("commands", "cmds"),
    ("arguments", "args"),
    ("optional", "opt"),
    ("required", "reqd"),
    ("permission", "perm"),
    ("permissions", "perms"),
    ("operation", "op"),
    ("operations", "ops"),
    ("resource", "rsc"),
    ("resources", "rscs"),
    ("identifier", "id"),
    ("identifiers", "ids"),
    ("significant", "major"),
    ("appropriate", "proper"),
    ("approximately", "~"),
    ("you", "u"),
    ("your", "ur"),
    ("please", "pls"),
    ("because", "bc"),
    ("without", "w/o"),
    ("through", "thru"),
    ("though", "tho"),
    ("although", "altho"),
    ("between", "btwn"),
    ("should", "shd"),
    ("would", "wd"),
    ("about", "abt"),
    ("help", "hlp"),
    ("provide", "prvd"),
    ("provides", "prvds"),
    ("explain", "expln"),
    ("include", "incl"),
    ("includes", "incls"),
    ("including", "inclg"),
    ("consider", "cnsdr"),
    ("suggest", "sgst"),
    ("respond", "rspnd"),
    ("different", "diff"),
    ("available", "avail"),
    ("following", "fllwng"),
    ("handle", "hndl"),
    ("manage", "mng"),
    ("analyze", "anlyz"),
    ("review", "rvw"),
    ("validate", "vldt"),
    ("necessary", "ncsry"),
    ("potential", "ptntl"),
    ("improve", "imprv"),
    ("identify", "idntfy"),
    ("specific", "spcfc"),
    ("relevant", "rlvnt"),
    ("recommend", "rcmnd"),
    ("understand", "undrstd"),
    ("determine", "dtrmn"),
    ("implement", "impl"),
    ("communicate", "convey"),
    ("comprehensive", "full"),
    ("particularly", "esp"),
    ("specifically", "esp"),
    ("functionality", "features"),
    ("additionally", "also"),
    ("consequently", "so"),
    ("requirements", "reqs"),
    ("automatically", "auto"),
    ("immediately", "now"),
    ("successfully", "OK"),
    ("consistently", "always"),
    ("optimization", "optim"),
    ("optimizations", "optims"),
    ("vulnerability", "vuln"),
    ("vulnerabilities", "vulns"),
    ("unfortunately", "sadly"),
    ("fundamentally", "at core"),
    ("alternatively", "or"),
    ("respectively", "each"),
    ("systematically", "methodically"),
    ("consideration", "factor"),
    ("considerations", "factors"),
    ("for example", "e.g."),
    ("that is", "i.e."),
    ("in other words", "i.e."),
    ("such as", "e.g."),
    ("to the extent that", "insofar as"),
    ("endpoint", "ep"),
    ("controller", "ctrl"),
    ("interface", "iface"),
    ("abstract", "abs"),
    ("constructor", "ctor"),
    ("destructor", "dtor"),
    ("encapsulation", "encap"),
    ("serialization", "serial"),
    ("deserialization", "deserial"),
    ("microservice", "µsvc"),
    ("kubernetes", "k8s"),
    ("patient", "pt"),
    ("hospital", "hosp"),
    ("medications", "meds"),
    ("agreement", "agmt"),
    ("paragraph", "para"),
    ("subsection", "subsec"),
    ("jurisdiction", "juris"),
    ("hereinafter", "(below)"),
    ("aforementioned", "(above)"),
    ("notwithstanding", "despite"),
    ("hereby", "(now)"),
    ("therein", "in it"),
    ("thereof", "of it"),
    ("deliverable", "dlv"),
    ("organization", "org"),
    ("department", "dept"),
];

/// Look up the table cost of a word or phrase.
pub fn lookup_cost(text: &str) -> Option<usize> {
    TOKEN_COSTS.get(text.to_lowercase().as_str()).copied()
}

/// Whether an original is flagged as token-neutral or token-negative.
pub fn is_unprofitable(original: &str) -> bool {
    let key = original.to_lowercase();
    ZERO_SAVINGS.contains(key.as_str()) || NEGATIVE_SAVINGS.contains(key.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_entries() {
        assert!(TOKEN_COSTS.len() > 100);
        assert!(TOKEN_COSTS.values().all(|&cost| cost > 0));
    }

    #[test]
    fn test_known_costs() {
        assert_eq!(lookup_cost("function"), Some(1));
        assert_eq!(lookup_cost("database"), Some(1));
        assert_eq!(lookup_cost("configuration"), Some(1));
        assert_eq!(lookup_cost("consequently"), Some(3));
        assert_eq!(lookup_cost("Consequently"), Some(3));
    }

    #[test]
    fn test_keys_are_lowercase() {
        for key in TOKEN_COSTS.keys() {
            assert_eq!(*key, key.to_lowercase(), "key '{key}' must be lowercase");
        }
    }

    #[test]
    fn test_zero_savings_members() {
        for word in ["function", "database", "string", "you", "your"] {
            assert!(ZERO_SAVINGS.contains(word), "'{word}' should be zero-savings");
        }
    }

    #[test]
    fn test_negative_savings_members() {
        for word in ["should", "without", "help", "provide"] {
            assert!(NEGATIVE_SAVINGS.contains(word), "'{word}' should be negative-savings");
        }
    }

    #[test]
    fn test_sets_are_disjoint() {
        for word in ZERO_SAVINGS.iter() {
            assert!(!NEGATIVE_SAVINGS.contains(word), "'{word}' is in both sets");
        }
    }

    #[test]
    fn test_flagged_originals_are_historical() {
        for word in ZERO_SAVINGS.iter().chain(NEGATIVE_SAVINGS.iter()) {
            assert!(
                HISTORICAL_ENTRIES.iter().any(|(original, _)| original == word),
                "'{word}' is flagged but has no historical entry"
            );
        }
        assert!(is_unprofitable("Database"));
        assert!(!is_unprofitable("consequently"));
    }
}
