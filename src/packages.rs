//! Well-known optional packages: the labels shown by the package prompt and
//! what each of them installs for a given framework.

use crate::flags::Framework;

/// npm package ids mapped to the label the package prompt uses.
static LABELS: [(&str, &str); 17] = [
    ("tailwindcss", "TailwindCSS"),
    ("dotenv", "DotENV"),
    ("react-icons", "React Icons"),
    ("framer-motion", "Framer Motion"),
    ("ogl", "OGL"),
    ("axios", "Axios"),
    ("firebase", "Firebase"),
    ("clerk", "Clerk"),
    ("appwrite", "Appwrite"),
    ("prisma", "Prisma"),
    ("react-router", "React Router"),
    ("react-router-dom", "React Router"),
    ("next-auth", "next-auth"),
    ("@next/font", "@next/font"),
    ("next-seo", "next-seo"),
    ("next-sitemap", "next-sitemap"),
    ("next-pwa", "next-pwa"),
];

static VITE_CHOICES: [&str; 11] = [
    "TailwindCSS",
    "React Router",
    "React Icons",
    "Framer Motion",
    "OGL",
    "DotENV",
    "Axios",
    "Firebase",
    "Clerk",
    "Appwrite",
    "Prisma",
];

static NEXT_CHOICES: [&str; 14] = [
    "TailwindCSS",
    "React Icons",
    "Framer Motion",
    "DotENV",
    "Axios",
    "Firebase",
    "Clerk",
    "Appwrite",
    "Prisma",
    "next-auth",
    "@next/font",
    "next-seo",
    "next-sitemap",
    "next-pwa",
];

const PRISMA_INIT: &str = "prisma@latest init --datasource-provider postgresql";

/// Returns the prompt label of a well-known npm package id.
pub fn label_for(npm_id: &str) -> Option<&'static str> {
    LABELS.iter().find(|(id, _)| *id == npm_id).map(|(_, label)| *label)
}

/// Labels offered by the package prompt for a framework.
pub fn choices(framework: &Framework) -> &'static [&'static str] {
    match framework {
        Framework::Vite => &VITE_CHOICES,
        Framework::NextJs => &NEXT_CHOICES,
        Framework::Unsupported(_) => &[],
    }
}

/// What selecting a package label installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallSpec {
    /// Runtime dependencies
    pub dependencies: &'static [&'static str],
    /// Development dependencies
    pub dev_dependencies: &'static [&'static str],
    /// Arguments of a follow-up command run through the package runner
    pub init: Option<&'static str>,
}

impl InstallSpec {
    const fn runtime(dependencies: &'static [&'static str]) -> Self {
        Self { dependencies, dev_dependencies: &[], init: None }
    }
}

const PRISMA: InstallSpec = InstallSpec {
    dependencies: &["@prisma/client"],
    dev_dependencies: &["prisma"],
    init: Some(PRISMA_INIT),
};

/// Returns the install spec of `label` on `framework`, if the framework offers it.
pub fn install_spec(label: &str, framework: &Framework) -> Option<InstallSpec> {
    let spec = match (framework, label) {
        (Framework::Vite, "TailwindCSS") => {
            InstallSpec::runtime(&["tailwindcss", "@tailwindcss/vite"])
        }
        (Framework::NextJs, "TailwindCSS") => {
            InstallSpec::runtime(&["tailwindcss", "@tailwindcss/postcss", "postcss"])
        }
        (Framework::Vite, "React Router") => InstallSpec::runtime(&["react-router-dom"]),
        (Framework::Vite, "Framer Motion") => {
            InstallSpec::runtime(&["framer-motion", "motion"])
        }
        (Framework::NextJs, "Framer Motion") => InstallSpec::runtime(&["framer-motion"]),
        (Framework::Vite, "OGL") => InstallSpec::runtime(&["ogl"]),
        (Framework::Vite, "Clerk") => InstallSpec::runtime(&["@clerk/clerk-react"]),
        (Framework::NextJs, "Clerk") => InstallSpec::runtime(&["@clerk/nextjs"]),
        (Framework::Vite | Framework::NextJs, "Prisma") => PRISMA,
        (Framework::Vite | Framework::NextJs, "React Icons") => {
            InstallSpec::runtime(&["react-icons"])
        }
        (Framework::Vite | Framework::NextJs, "DotENV") => InstallSpec::runtime(&["dotenv"]),
        (Framework::Vite | Framework::NextJs, "Axios") => InstallSpec::runtime(&["axios"]),
        (Framework::Vite | Framework::NextJs, "Firebase") => {
            InstallSpec::runtime(&["firebase"])
        }
        (Framework::Vite | Framework::NextJs, "Appwrite") => {
            InstallSpec::runtime(&["appwrite"])
        }
        (Framework::NextJs, "next-auth") => InstallSpec::runtime(&["next-auth"]),
        (Framework::NextJs, "@next/font") => InstallSpec::runtime(&["@next/font"]),
        (Framework::NextJs, "next-seo") => InstallSpec::runtime(&["next-seo"]),
        (Framework::NextJs, "next-sitemap") => InstallSpec::runtime(&["next-sitemap"]),
        (Framework::NextJs, "next-pwa") => InstallSpec::runtime(&["next-pwa"]),
        _ => return None,
    };
    Some(spec)
}
