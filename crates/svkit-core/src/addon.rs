use serde::Serialize;

/// `sv add` で指定できる既知のアドオン。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Addon {
    pub id: &'static str,
    pub title: &'static str,
}

/// 既知アドオン一覧（表示順）。コマンド生成はこの一覧外の ID も受け付ける。
pub const KNOWN_ADDONS: &[Addon] = &[
    Addon { id: "tailwindcss", title: "Tailwind CSS" },
    Addon { id: "drizzle", title: "Drizzle ORM" },
    Addon { id: "lucia", title: "Lucia Auth" },
    Addon { id: "mdsvex", title: "MDsveX (Markdown)" },
    Addon { id: "paraglide", title: "Paraglide (i18n)" },
    Addon { id: "playwright", title: "Playwright (E2E)" },
    Addon { id: "vitest", title: "Vitest (Unit Tests)" },
    Addon { id: "prettier", title: "Prettier" },
    Addon { id: "eslint", title: "ESLint" },
    Addon { id: "storybook", title: "Storybook" },
    Addon { id: "sveltekit-adapter", title: "SvelteKit Adapter" },
    Addon { id: "mcp", title: "MCP Server" },
    Addon { id: "devtools-json", title: "Devtools JSON" },
];

pub fn find_addon(id: &str) -> Option<&'static Addon> {
    KNOWN_ADDONS.iter().find(|a| a.id == id)
}
